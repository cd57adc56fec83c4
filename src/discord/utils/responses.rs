// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::shared_components::{
	closed_ticket_buttons, giveaway_buttons, new_ticket_button, open_ticket_buttons, verify_button,
};
use crate::discord::error::BotError;
use crate::discord::state::giveaways::GiveawayDetails;
use std::time::Duration;
use twilight_http::request::channel::message::create_message::CreateMessage;
use twilight_mention::fmt::Mention;
use twilight_model::channel::message::AllowedMentions;
use twilight_model::channel::message::component::Component;
use twilight_model::channel::message::embed::Embed;
use twilight_model::http::interaction::InteractionResponseData;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder, ImageSource};
use twilight_validate::embed::EmbedValidationError;

const OPEN_COLOR: u32 = 0x5865f2;
const CLOSED_COLOR: u32 = 0xed4245;
const CLAIMED_COLOR: u32 = 0x57f287;
const GIVEAWAY_COLOR: u32 = 0xf1c40f;
const ENDED_COLOR: u32 = 0x95a5a6;

/// Whether a participant is being let into or shut out of a ticket
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParticipantChange {
	Add,
	Remove,
}

/// Contains everything needed to post or edit one bot message
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutgoingMessage {
	pub content: Option<String>,
	pub embeds: Vec<Embed>,
	pub components: Vec<Component>,
	pub allowed_mentions: AllowedMentions,
}

impl OutgoingMessage {
	/// Adds all of the message data to a [CreateMessage] builder
	pub fn set_create_message_data<'a>(&'a self, mut create_message: CreateMessage<'a>) -> CreateMessage<'a> {
		if let Some(content) = &self.content {
			create_message = create_message.content(content);
		}
		create_message
			.embeds(&self.embeds)
			.components(&self.components)
			.allowed_mentions(Some(&self.allowed_mentions))
	}
}

impl From<OutgoingMessage> for InteractionResponseData {
	fn from(data: OutgoingMessage) -> Self {
		let mut response = InteractionResponseDataBuilder::new();
		if let Some(content) = &data.content {
			response = response.content(content)
		}
		response
			.embeds(data.embeds)
			.components(data.components)
			.allowed_mentions(data.allowed_mentions)
			.build()
	}
}

fn embed_message(embed: EmbedBuilder, components: Vec<Component>) -> Result<OutgoingMessage, EmbedValidationError> {
	Ok(OutgoingMessage {
		content: None,
		embeds: vec![embed.validate()?.build()],
		components,
		allowed_mentions: AllowedMentions::default(),
	})
}

fn pinging(mut message: OutgoingMessage, user: Id<UserMarker>) -> OutgoingMessage {
	message.content = Some(format!("{}", user.mention()));
	message.allowed_mentions.users.push(user);
	message
}

pub fn ticket_panel_post() -> Result<OutgoingMessage, EmbedValidationError> {
	let embed = EmbedBuilder::new()
		.title("Need help?")
		.description("Press the button below to open a private ticket with the staff team.")
		.color(OPEN_COLOR);
	embed_message(embed, vec![new_ticket_button()])
}

pub fn verification_panel_post() -> Result<OutgoingMessage, EmbedValidationError> {
	let embed = EmbedBuilder::new()
		.title("Verification")
		.description("Press the button below to verify yourself and get access to the server.")
		.color(CLAIMED_COLOR);
	embed_message(embed, vec![verify_button()])
}

/// The first message in a new ticket channel, which pings the requester.
pub fn ticket_welcome(requester: Id<UserMarker>) -> Result<OutgoingMessage, EmbedValidationError> {
	Ok(pinging(open_ticket_panel()?, requester))
}

pub fn open_ticket_panel() -> Result<OutgoingMessage, EmbedValidationError> {
	let embed = EmbedBuilder::new()
		.title("Support Ticket")
		.description("Thank you for reaching out. A member of staff will be with you shortly.")
		.color(OPEN_COLOR);
	embed_message(embed, open_ticket_buttons())
}

pub fn closed_ticket_panel(closed_by: Id<UserMarker>) -> Result<OutgoingMessage, EmbedValidationError> {
	let embed = EmbedBuilder::new()
		.title("Ticket Closed")
		.description(format!("This ticket was closed by {}.", closed_by.mention()))
		.color(CLOSED_COLOR);
	embed_message(embed, closed_ticket_buttons())
}

pub fn ticket_claimed(claimant: Id<UserMarker>) -> Result<OutgoingMessage, EmbedValidationError> {
	let embed = EmbedBuilder::new()
		.title("Ticket Claimed")
		.description(format!("{} will be handling this ticket.", claimant.mention()))
		.color(CLAIMED_COLOR);
	embed_message(embed, Vec::new())
}

pub fn participant_prompt(actor: Id<UserMarker>, change: ParticipantChange, wait: Duration) -> OutgoingMessage {
	let verb = match change {
		ParticipantChange::Add => "add to",
		ParticipantChange::Remove => "remove from",
	};
	let content = format!(
		"{}, mention the user to {} this ticket. You have {} seconds.",
		actor.mention(),
		verb,
		wait.as_secs()
	);
	let mut allowed_mentions = AllowedMentions::default();
	allowed_mentions.users.push(actor);
	OutgoingMessage {
		content: Some(content),
		allowed_mentions,
		..Default::default()
	}
}

pub fn participant_changed(user: Id<UserMarker>, change: ParticipantChange) -> String {
	match change {
		ParticipantChange::Add => format!("{} has been added to this ticket.", user.mention()),
		ParticipantChange::Remove => format!("{} has been removed from this ticket.", user.mention()),
	}
}

pub fn deletion_countdown(delay: Duration) -> Result<OutgoingMessage, EmbedValidationError> {
	let embed = EmbedBuilder::new()
		.title("Deleting Ticket")
		.description(format!("This ticket will be deleted in {} seconds.", delay.as_secs()))
		.color(CLOSED_COLOR);
	embed_message(embed, Vec::new())
}

fn giveaway_embed(details: &GiveawayDetails) -> Result<EmbedBuilder, BotError> {
	let mut embed = EmbedBuilder::new()
		.title(format!("🎉 {}", details.title))
		.description(&details.description)
		.color(GIVEAWAY_COLOR)
		.field(EmbedFieldBuilder::new("Reward", &details.reward).inline())
		.field(EmbedFieldBuilder::new("Hosted by", format!("{}", details.host.mention())).inline());
	if let Some(co_host) = details.co_host {
		embed = embed.field(EmbedFieldBuilder::new("Co-host", format!("{}", co_host.mention())).inline());
	}
	if let Some(image_url) = &details.image_url {
		embed = embed.image(ImageSource::url(image_url)?);
	}
	Ok(embed)
}

/// The live giveaway message, showing the current number of entries.
pub fn giveaway_panel(details: &GiveawayDetails, entry_count: usize) -> Result<OutgoingMessage, BotError> {
	let embed = giveaway_embed(details)?
		.field(EmbedFieldBuilder::new("Entries", entry_count.to_string()))
		.footer(EmbedFooterBuilder::new("Press Enter to join!"));
	Ok(embed_message(embed, giveaway_buttons())?)
}

/// The final state of a giveaway message. It has no buttons, so nobody can interact with it anymore.
pub fn giveaway_ended_panel(
	details: &GiveawayDetails,
	entry_count: usize,
	winner: Id<UserMarker>,
	winner_name: &str,
) -> Result<OutgoingMessage, BotError> {
	let embed = giveaway_embed(details)?
		.color(ENDED_COLOR)
		.field(EmbedFieldBuilder::new("Winner", format!("{} ({})", winner.mention(), winner_name)))
		.field(EmbedFieldBuilder::new("Entries", entry_count.to_string()))
		.footer(EmbedFooterBuilder::new("This giveaway has ended."));
	Ok(embed_message(embed, Vec::new())?)
}

pub fn giveaway_congratulations(winner: Id<UserMarker>, reward: &str) -> OutgoingMessage {
	let mut allowed_mentions = AllowedMentions::default();
	allowed_mentions.users.push(winner);
	OutgoingMessage {
		content: Some(format!("🎉 Congratulations {}! You won **{}**!", winner.mention(), reward)),
		allowed_mentions,
		..Default::default()
	}
}
