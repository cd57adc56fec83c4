// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::interactions::interaction_channel;
use crate::discord::interactions::respond::Responder;
use crate::discord::state::BotState;
use crate::discord::utils::permissions::GIVEAWAY_HOST_PERMISSION;
use crate::discord::workflows::Actor;
use crate::discord::workflows::giveaways::{GiveawayOptions, create_giveaway};
use miette::bail;
use std::sync::Arc;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_util::builder::command::{CommandBuilder, StringBuilder, UserBuilder};

pub fn command_definition() -> Command {
	let title = StringBuilder::new("title", "What the giveaway is called").required(true);
	let description = StringBuilder::new("description", "What the giveaway is about").required(true);
	let reward = StringBuilder::new("reward", "What the winner gets").required(true);
	let image = StringBuilder::new("image", "Link to an image to show with the giveaway");
	let cohost = UserBuilder::new("cohost", "Someone else who may end the giveaway");
	CommandBuilder::new("giveaway", "Start a giveaway in this channel", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.default_member_permissions(GIVEAWAY_HOST_PERMISSION)
		.option(title)
		.option(description)
		.option(reward)
		.option(image)
		.option(cohost)
		.build()
}

/// Reads the giveaway options out of the command arguments.
fn giveaway_options(command_data: &CommandData) -> miette::Result<GiveawayOptions> {
	let mut options = GiveawayOptions::default();
	for option in command_data.options.iter() {
		match (option.name.as_str(), &option.value) {
			("title", CommandOptionValue::String(value)) => options.title = value.clone(),
			("description", CommandOptionValue::String(value)) => options.description = value.clone(),
			("reward", CommandOptionValue::String(value)) => options.reward = value.clone(),
			("image", CommandOptionValue::String(value)) => options.image_url = Some(value.clone()),
			("cohost", CommandOptionValue::User(user)) => options.co_host = Some(*user),
			(name, value) => bail!("Giveaway command received unexpected option {}: {:?}", name, value),
		}
	}
	if options.title.is_empty() || options.description.is_empty() || options.reward.is_empty() {
		bail!("Giveaway command received without required options");
	}
	Ok(options)
}

pub async fn handle_command(
	interaction: &InteractionCreate,
	command_data: &CommandData,
	responder: &Responder<'_>,
	actor: &Actor,
	bot_state: &Arc<BotState>,
) -> miette::Result<()> {
	let channel = interaction_channel(interaction)?;
	let options = giveaway_options(command_data)?;

	let result = create_giveaway(
		bot_state.actions.as_ref(),
		&bot_state.giveaways,
		channel,
		actor,
		options,
	)
	.await;
	match result {
		Ok(_) => responder.ephemeral("Your giveaway has started!").await,
		Err(error) => responder.refuse(&error).await,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use twilight_model::application::interaction::application_command::CommandDataOption;
	use twilight_model::id::Id;

	fn command_data(options: Vec<(&str, CommandOptionValue)>) -> CommandData {
		CommandData {
			guild_id: None,
			id: Id::new(1),
			name: String::from("giveaway"),
			kind: CommandType::ChatInput,
			options: options
				.into_iter()
				.map(|(name, value)| CommandDataOption {
					name: String::from(name),
					value,
				})
				.collect(),
			resolved: None,
			target_id: None,
		}
	}

	#[test]
	fn options_are_read() {
		let data = command_data(vec![
			("title", CommandOptionValue::String(String::from("Summer Raffle"))),
			("description", CommandOptionValue::String(String::from("Win it"))),
			("reward", CommandOptionValue::String(String::from("Gift Card"))),
			("cohost", CommandOptionValue::User(Id::new(7))),
		]);
		let options = giveaway_options(&data).unwrap();
		assert_eq!(options.title, "Summer Raffle");
		assert_eq!(options.reward, "Gift Card");
		assert_eq!(options.image_url, None);
		assert_eq!(options.co_host, Some(Id::new(7)));
	}

	#[test]
	fn missing_reward_is_rejected() {
		let data = command_data(vec![
			("title", CommandOptionValue::String(String::from("Summer Raffle"))),
			("description", CommandOptionValue::String(String::from("Win it"))),
		]);
		assert!(giveaway_options(&data).is_err());
	}
}
