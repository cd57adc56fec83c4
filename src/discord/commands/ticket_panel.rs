// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::interactions::respond::Responder;
use crate::discord::utils::permissions::TICKET_STAFF_PERMISSION;
use crate::discord::workflows::Actor;
use crate::discord::workflows::tickets::ticket_panel;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_util::builder::command::CommandBuilder;

pub fn command_definition() -> Command {
	CommandBuilder::new(
		"ticket_panel",
		"Post a message members can use to open tickets",
		CommandType::ChatInput,
	)
	.contexts([InteractionContextType::Guild])
	.default_member_permissions(TICKET_STAFF_PERMISSION)
	.build()
}

pub async fn handle_command(responder: &Responder<'_>, actor: &Actor) -> miette::Result<()> {
	match ticket_panel(actor) {
		Ok(panel) => responder.public(panel).await,
		Err(error) => responder.refuse(&error).await,
	}
}
