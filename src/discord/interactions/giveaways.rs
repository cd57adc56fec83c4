// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::GiveawayAction;
use super::respond::Responder;
use crate::discord::state::BotState;
use crate::discord::workflows::Actor;
use crate::discord::workflows::giveaways::{end_giveaway, enter_giveaway};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use twilight_mention::fmt::Mention;
use twilight_model::id::Id;
use twilight_model::id::marker::MessageMarker;

pub async fn handle_giveaway_action(
	responder: &Responder<'_>,
	action: GiveawayAction,
	message: Id<MessageMarker>,
	actor: &Actor,
	bot_state: &Arc<BotState>,
) -> miette::Result<()> {
	let actions = bot_state.actions.as_ref();
	match action {
		GiveawayAction::Enter => match enter_giveaway(actions, &bot_state.giveaways, message, actor).await {
			Ok(entries) => {
				responder
					.ephemeral(&format!("You're entered! There are now {} entries.", entries))
					.await
			}
			Err(error) => responder.refuse(&error).await,
		},
		GiveawayAction::End => {
			let mut rng = StdRng::from_entropy();
			match end_giveaway(actions, &bot_state.giveaways, message, actor, &mut rng).await {
				Ok(winner) => {
					responder
						.ephemeral(&format!("The giveaway has ended. {} won!", winner.mention()))
						.await
				}
				Err(error) => responder.refuse(&error).await,
			}
		}
	}
}
