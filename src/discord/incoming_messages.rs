// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::collector::MessageCollectors;
use twilight_model::channel::message::Message;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;

/// Hands a posted message to whichever prompt is waiting on its author, if any.
pub fn handle_message(message: &Message, collectors: &MessageCollectors) {
	if message.author.bot {
		return;
	}

	let mentions: Vec<Id<UserMarker>> = message.mentions.iter().map(|mention| mention.id).collect();
	if collectors.offer(message.channel_id, message.author.id, &mentions) {
		tracing::debug!(
			channel = message.channel_id.get(),
			author = message.author.id.get(),
			"Message answered a mention prompt"
		);
	}
}
