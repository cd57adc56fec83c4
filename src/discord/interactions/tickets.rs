// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::TicketAction;
use super::respond::Responder;
use crate::discord::state::BotState;
use crate::discord::utils::responses::{ParticipantChange, participant_changed};
use crate::discord::workflows::Actor;
use crate::discord::workflows::tickets::{
	change_participant, claim_ticket, close_ticket, create_ticket, delete_ticket, reopen_ticket,
};
use std::sync::Arc;
use twilight_mention::fmt::Mention;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;

/// Opens a ticket for the acting member, from either the panel button or the `/ticket` command.
pub async fn open_ticket(responder: &Responder<'_>, actor: &Actor, bot_state: &Arc<BotState>) -> miette::Result<()> {
	match create_ticket(bot_state.actions.as_ref(), &bot_state.tickets, actor).await {
		Ok(channel) => {
			responder
				.ephemeral(&format!("Your ticket has been created: {}", channel.mention()))
				.await
		}
		Err(error) => responder.refuse(&error).await,
	}
}

pub async fn handle_ticket_action(
	responder: &Responder<'_>,
	action: TicketAction,
	channel: Id<ChannelMarker>,
	actor: &Actor,
	bot_state: &Arc<BotState>,
) -> miette::Result<()> {
	let actions = bot_state.actions.as_ref();
	let tickets = &bot_state.tickets;
	match action {
		TicketAction::Claim => match claim_ticket(tickets, channel, actor) {
			Ok(announcement) => responder.public(announcement).await,
			Err(error) => responder.refuse(&error).await,
		},
		TicketAction::AddParticipant => {
			handle_participant_change(responder, channel, actor, ParticipantChange::Add, bot_state).await
		}
		TicketAction::RemoveParticipant => {
			handle_participant_change(responder, channel, actor, ParticipantChange::Remove, bot_state).await
		}
		TicketAction::Close => match close_ticket(actions, tickets, channel, actor).await {
			Ok(panel) => responder.update(panel).await,
			Err(error) => responder.refuse(&error).await,
		},
		TicketAction::Reopen => match reopen_ticket(actions, tickets, channel, actor).await {
			Ok(panel) => responder.update(panel).await,
			Err(error) => responder.refuse(&error).await,
		},
		TicketAction::Delete => match delete_ticket(&bot_state.actions, tickets, channel, actor) {
			Ok(countdown) => responder.public(countdown).await,
			Err(error) => responder.refuse(&error).await,
		},
	}
}

// The mention wait outlasts the interaction response deadline, so the response is deferred.
async fn handle_participant_change(
	responder: &Responder<'_>,
	channel: Id<ChannelMarker>,
	actor: &Actor,
	change: ParticipantChange,
	bot_state: &Arc<BotState>,
) -> miette::Result<()> {
	responder.defer_ephemeral().await?;
	match change_participant(bot_state.actions.as_ref(), channel, actor, change).await {
		Ok(user) => responder.follow_up(&participant_changed(user, change)).await,
		Err(error) => responder.refuse_follow_up(&error).await,
	}
}
