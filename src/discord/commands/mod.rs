// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::interactions::respond::Responder;
use super::state::BotState;
use super::workflows::Actor;
use miette::bail;
use std::sync::Arc;
use twilight_http::client::Client;
use twilight_model::application::command::Command;
use twilight_model::application::interaction::application_command::CommandData;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::id::Id;
use twilight_model::id::marker::ApplicationMarker;

mod giveaway;
mod ticket;
mod ticket_panel;
mod verification_panel;
mod verify;

/// Every slash command the bot registers
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BotCommand {
	Giveaway,
	Ticket,
	TicketPanel,
	Verify,
	VerificationPanel,
}

impl BotCommand {
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"giveaway" => Some(Self::Giveaway),
			"ticket" => Some(Self::Ticket),
			"ticket_panel" => Some(Self::TicketPanel),
			"verify" => Some(Self::Verify),
			"verification_panel" => Some(Self::VerificationPanel),
			_ => None,
		}
	}
}

pub fn command_definitions() -> Vec<Command> {
	vec![
		giveaway::command_definition(),
		ticket::command_definition(),
		ticket_panel::command_definition(),
		verification_panel::command_definition(),
		verify::command_definition(),
	]
}

pub async fn route_command(
	interaction: &InteractionCreate,
	command_data: &CommandData,
	http_client: &Client,
	application_id: Id<ApplicationMarker>,
	bot_state: &Arc<BotState>,
) -> miette::Result<()> {
	let Some(command) = BotCommand::from_name(&command_data.name) else {
		bail!("Unknown command encountered: {}\n{:?}", command_data.name, command_data);
	};
	let Some(actor) = Actor::from_interaction(interaction) else {
		bail!("The {} command was used outside of a guild", command_data.name);
	};
	let responder = Responder::new(http_client.interaction(application_id), interaction);

	match command {
		BotCommand::Giveaway => giveaway::handle_command(interaction, command_data, &responder, &actor, bot_state).await,
		BotCommand::Ticket => ticket::handle_command(&responder, &actor, bot_state).await,
		BotCommand::TicketPanel => ticket_panel::handle_command(&responder, &actor).await,
		BotCommand::Verify => verify::handle_command(&responder, &actor, bot_state).await,
		BotCommand::VerificationPanel => verification_panel::handle_command(&responder, &actor).await,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_definition_routes() {
		for definition in command_definitions() {
			assert!(
				BotCommand::from_name(&definition.name).is_some(),
				"{} has no route",
				definition.name
			);
		}
	}

	#[test]
	fn unknown_command_has_no_route() {
		assert_eq!(BotCommand::from_name("close"), None);
	}
}
