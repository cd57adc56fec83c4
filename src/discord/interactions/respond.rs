// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::error::BotError;
use crate::discord::utils::responses::OutgoingMessage;
use miette::IntoDiagnostic;
use twilight_http::client::InteractionClient;
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType};
use twilight_util::builder::InteractionResponseDataBuilder;

/// Answers a single interaction through the interaction client.
pub struct Responder<'a> {
	interaction_client: InteractionClient<'a>,
	interaction: &'a InteractionCreate,
}

impl<'a> Responder<'a> {
	pub fn new(interaction_client: InteractionClient<'a>, interaction: &'a InteractionCreate) -> Self {
		Self {
			interaction_client,
			interaction,
		}
	}

	async fn respond(&self, kind: InteractionResponseType, data: Option<InteractionResponseData>) -> miette::Result<()> {
		let response = InteractionResponse { kind, data };
		self.interaction_client
			.create_response(self.interaction.id, &self.interaction.token, &response)
			.await
			.into_diagnostic()?;
		Ok(())
	}

	/// Replies with a message only the acting user can see.
	pub async fn ephemeral(&self, content: &str) -> miette::Result<()> {
		let response = InteractionResponseDataBuilder::new()
			.content(content)
			.flags(MessageFlags::EPHEMERAL)
			.build();
		self.respond(InteractionResponseType::ChannelMessageWithSource, Some(response))
			.await
	}

	/// Replies with a message posted publicly in the channel.
	pub async fn public(&self, message: OutgoingMessage) -> miette::Result<()> {
		self.respond(InteractionResponseType::ChannelMessageWithSource, Some(message.into()))
			.await
	}

	/// Replaces the message whose component was used.
	pub async fn update(&self, message: OutgoingMessage) -> miette::Result<()> {
		self.respond(InteractionResponseType::UpdateMessage, Some(message.into()))
			.await
	}

	/// Acknowledges the interaction with a private "thinking" state, to be finished with [Self::follow_up].
	pub async fn defer_ephemeral(&self) -> miette::Result<()> {
		let response = InteractionResponseDataBuilder::new()
			.flags(MessageFlags::EPHEMERAL)
			.build();
		self.respond(InteractionResponseType::DeferredChannelMessageWithSource, Some(response))
			.await
	}

	/// Finishes a deferred interaction with a private message.
	pub async fn follow_up(&self, content: &str) -> miette::Result<()> {
		self.interaction_client
			.create_followup(&self.interaction.token)
			.content(content)
			.flags(MessageFlags::EPHEMERAL)
			.await
			.into_diagnostic()?;
		Ok(())
	}

	/// Tells the acting user why their action was refused.
	pub async fn refuse(&self, error: &BotError) -> miette::Result<()> {
		log_refusal(error);
		self.ephemeral(&error.notice()).await
	}

	/// Like [Self::refuse], for interactions that were deferred.
	pub async fn refuse_follow_up(&self, error: &BotError) -> miette::Result<()> {
		log_refusal(error);
		self.follow_up(&error.notice()).await
	}
}

fn log_refusal(error: &BotError) {
	match error {
		BotError::ExternalActionFailed(_) | BotError::InvalidContent(_) => {
			tracing::warn!(source = ?error, "Interaction action failed")
		}
		_ => tracing::debug!(reason = %error, "Interaction refused"),
	}
}
