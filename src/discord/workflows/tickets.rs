// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Actor;
use crate::discord::actions::DiscordActions;
use crate::discord::error::BotError;
use crate::discord::state::tickets::TicketStore;
use crate::discord::utils::permissions::{TICKET_STAFF_PERMISSION, require};
use crate::discord::utils::responses::{
	OutgoingMessage, ParticipantChange, closed_ticket_panel, deletion_countdown, open_ticket_panel,
	participant_prompt, ticket_claimed, ticket_panel_post, ticket_welcome,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, UserMarker};

/// How long staff have to mention the user they're adding or removing
pub const PARTICIPANT_WAIT: Duration = Duration::from_secs(30);
/// How long a ticket lingers between pressing delete and the channel going away
pub const DELETION_DELAY: Duration = Duration::from_secs(5);

/// Gets the name of the ticket channel for a user. Two users whose names produce the same channel name share one
/// ticket slot.
pub fn ticket_channel_name(username: &str) -> String {
	let name: Vec<String> = username
		.split_whitespace()
		.map(|part| part.to_lowercase())
		.collect();
	format!("ticket-{}", name.join("-"))
}

/// Gets the message with the "Create Ticket" button, for staff to post where members can find it.
pub fn ticket_panel(actor: &Actor) -> Result<OutgoingMessage, BotError> {
	require(TICKET_STAFF_PERMISSION, actor.permissions)?;
	Ok(ticket_panel_post()?)
}

/// Opens a ticket channel for the acting member and posts the ticket panel in it.
pub async fn create_ticket(
	actions: &dyn DiscordActions,
	tickets: &TicketStore,
	actor: &Actor,
) -> Result<Id<ChannelMarker>, BotError> {
	require(Permissions::empty(), actor.permissions)?;

	let channel_name = ticket_channel_name(&actor.name);
	if actions
		.find_channel_by_name(actor.guild, &channel_name)
		.await?
		.is_some()
	{
		return Err(BotError::AlreadyExists);
	}
	let welcome = ticket_welcome(actor.id)?;

	let channel = actions
		.create_ticket_channel(actor.guild, &channel_name, actor.id)
		.await?;
	tickets.open(channel, actor.id);
	actions.send_message(channel, &welcome).await?;

	tracing::info!(channel = channel.get(), requester = actor.id.get(), "Ticket opened");
	Ok(channel)
}

/// Makes the acting staff member the claimant of the ticket, returning the announcement to post.
pub fn claim_ticket(
	tickets: &TicketStore,
	channel: Id<ChannelMarker>,
	actor: &Actor,
) -> Result<OutgoingMessage, BotError> {
	require(TICKET_STAFF_PERMISSION, actor.permissions)?;
	let announcement = ticket_claimed(actor.id)?;
	tickets.claim(channel, actor.id)?;
	Ok(announcement)
}

/// Asks the acting staff member who to add to or remove from the ticket, then applies it to whoever they mention.
pub async fn change_participant(
	actions: &dyn DiscordActions,
	channel: Id<ChannelMarker>,
	actor: &Actor,
	change: ParticipantChange,
) -> Result<Id<UserMarker>, BotError> {
	require(TICKET_STAFF_PERMISSION, actor.permissions)?;

	let prompt = participant_prompt(actor.id, change, PARTICIPANT_WAIT);
	actions.send_message(channel, &prompt).await?;

	let Some(user) = actions.await_mention(channel, actor.id, PARTICIPANT_WAIT).await? else {
		return Err(BotError::NoResponse);
	};
	actions
		.set_member_access(channel, user, change == ParticipantChange::Add)
		.await?;
	Ok(user)
}

/// Hides the ticket from the requester and everyone else, returning the closed ticket panel.
pub async fn close_ticket(
	actions: &dyn DiscordActions,
	tickets: &TicketStore,
	channel: Id<ChannelMarker>,
	actor: &Actor,
) -> Result<OutgoingMessage, BotError> {
	require(TICKET_STAFF_PERMISSION, actor.permissions)?;
	let panel = closed_ticket_panel(actor.id)?;

	actions
		.set_role_visibility(channel, actor.guild.cast(), false)
		.await?;
	if let Some(requester) = tickets.requester(channel) {
		actions.set_member_access(channel, requester, false).await?;
	}
	tickets.close(channel);
	Ok(panel)
}

/// Lets the requester back into a closed ticket, cancelling any pending deletion, and returns the open ticket panel.
pub async fn reopen_ticket(
	actions: &dyn DiscordActions,
	tickets: &TicketStore,
	channel: Id<ChannelMarker>,
	actor: &Actor,
) -> Result<OutgoingMessage, BotError> {
	require(TICKET_STAFF_PERMISSION, actor.permissions)?;
	let panel = open_ticket_panel()?;

	let Some(requester) = tickets.requester(channel) else {
		return Err(BotError::NotFound);
	};
	actions.set_member_access(channel, requester, true).await?;
	tickets.reopen(channel)?;
	Ok(panel)
}

/// Schedules the ticket channel for deletion after [DELETION_DELAY], returning the countdown notice to post.
///
/// The deletion is cancelled if the ticket is reopened before it runs.
pub fn delete_ticket(
	actions: &Arc<dyn DiscordActions>,
	tickets: &Arc<TicketStore>,
	channel: Id<ChannelMarker>,
	actor: &Actor,
) -> Result<OutgoingMessage, BotError> {
	require(TICKET_STAFF_PERMISSION, actor.permissions)?;
	let countdown = deletion_countdown(DELETION_DELAY)?;

	tickets.begin_deletion(channel)?;
	let deletion = tokio::spawn(delete_after_delay(
		Arc::clone(actions),
		Arc::clone(tickets),
		channel,
		DELETION_DELAY,
	));
	tickets.attach_deletion(channel, deletion.abort_handle());

	tracing::info!(channel = channel.get(), actor = actor.id.get(), "Ticket deletion scheduled");
	Ok(countdown)
}

async fn delete_after_delay(
	actions: Arc<dyn DiscordActions>,
	tickets: Arc<TicketStore>,
	channel: Id<ChannelMarker>,
	delay: Duration,
) {
	sleep(delay).await;
	if !tickets.finish_deletion(channel) {
		return;
	}
	if let Err(error) = actions.delete_channel(channel).await {
		tracing::error!(source = ?error, channel = channel.get(), "Failed to delete ticket channel");
	}
}
