// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::interactions::respond::Responder;
use crate::discord::interactions::verify_actor;
use crate::discord::state::BotState;
use crate::discord::workflows::Actor;
use std::sync::Arc;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_util::builder::command::CommandBuilder;

pub fn command_definition() -> Command {
	CommandBuilder::new("verify", "Verify yourself to get access to the server", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.build()
}

pub async fn handle_command(responder: &Responder<'_>, actor: &Actor, bot_state: &Arc<BotState>) -> miette::Result<()> {
	verify_actor(responder, actor, bot_state).await
}
