// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::state::BotState;
use super::workflows::Actor;
use miette::bail;
use respond::Responder;
use std::sync::Arc;
use twilight_http::client::Client;
use twilight_model::application::interaction::message_component::MessageComponentInteractionData;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::id::Id;
use twilight_model::id::marker::{ApplicationMarker, ChannelMarker};

mod giveaways;
mod kind;
pub mod respond;
mod tickets;
mod verify;

pub use kind::{BotInteraction, GiveawayAction, TicketAction};
pub use tickets::open_ticket;
pub use verify::verify_actor;

pub async fn route_interaction(
	interaction: &InteractionCreate,
	interaction_data: &MessageComponentInteractionData,
	http_client: &Client,
	application_id: Id<ApplicationMarker>,
	bot_state: &Arc<BotState>,
) -> miette::Result<()> {
	let Some(bot_interaction) = BotInteraction::from_custom_id(&interaction_data.custom_id) else {
		bail!("Unknown interaction encountered: {}", interaction_data.custom_id);
	};
	let Some(actor) = Actor::from_interaction(interaction) else {
		bail!("Interaction {} didn't come from a guild member", bot_interaction);
	};
	let responder = Responder::new(http_client.interaction(application_id), interaction);

	match bot_interaction {
		BotInteraction::CreateTicket => tickets::open_ticket(&responder, &actor, bot_state).await,
		BotInteraction::Verify => verify_actor(&responder, &actor, bot_state).await,
		BotInteraction::Ticket(action) => {
			let channel = interaction_channel(interaction)?;
			tickets::handle_ticket_action(&responder, action, channel, &actor, bot_state).await
		}
		BotInteraction::Giveaway(action) => {
			let Some(message) = interaction.message.as_ref() else {
				bail!("Giveaway interaction {} has no message", bot_interaction);
			};
			giveaways::handle_giveaway_action(&responder, action, message.id, &actor, bot_state).await
		}
	}
}

pub fn interaction_channel(interaction: &InteractionCreate) -> miette::Result<Id<ChannelMarker>> {
	match interaction.channel.as_ref() {
		Some(channel) => Ok(channel.id),
		None => bail!("Interaction {} has no channel", interaction.id),
	}
}
