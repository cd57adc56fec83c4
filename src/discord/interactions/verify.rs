// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::respond::Responder;
use crate::discord::state::BotState;
use crate::discord::workflows::Actor;
use crate::discord::workflows::verification::verify_member;
use std::sync::Arc;
use twilight_mention::fmt::Mention;

/// Verifies the acting member, from either the panel button or the `/verify` command.
pub async fn verify_actor(responder: &Responder<'_>, actor: &Actor, bot_state: &Arc<BotState>) -> miette::Result<()> {
	match verify_member(bot_state.actions.as_ref(), actor).await {
		Ok(role) => {
			responder
				.ephemeral(&format!("You've been verified and given the {} role.", role.mention()))
				.await
		}
		Err(error) => responder.refuse(&error).await,
	}
}
