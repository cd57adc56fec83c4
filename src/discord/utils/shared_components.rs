// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::interactions::{BotInteraction, GiveawayAction, TicketAction};
use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

fn button(interaction: BotInteraction, label: &str, style: ButtonStyle) -> Component {
	Component::Button(Button {
		custom_id: Some(interaction.to_string()),
		disabled: false,
		emoji: None,
		label: Some(String::from(label)),
		style,
		url: None,
		sku_id: None,
	})
}

fn action_row(components: Vec<Component>) -> Component {
	Component::ActionRow(ActionRow { components })
}

pub fn new_ticket_button() -> Component {
	action_row(vec![button(BotInteraction::CreateTicket, "Create Ticket", ButtonStyle::Primary)])
}

pub fn verify_button() -> Component {
	action_row(vec![button(BotInteraction::Verify, "Verify", ButtonStyle::Success)])
}

/// Buttons on the panel of an open ticket. Creating and reopening a ticket both produce exactly this set.
pub fn open_ticket_buttons() -> Vec<Component> {
	vec![
		action_row(vec![
			button(BotInteraction::Ticket(TicketAction::Claim), "Claim", ButtonStyle::Primary),
			button(
				BotInteraction::Ticket(TicketAction::AddParticipant),
				"Add User",
				ButtonStyle::Secondary,
			),
			button(
				BotInteraction::Ticket(TicketAction::RemoveParticipant),
				"Remove User",
				ButtonStyle::Secondary,
			),
		]),
		action_row(vec![
			button(BotInteraction::Ticket(TicketAction::Close), "Close", ButtonStyle::Danger),
			button(BotInteraction::Ticket(TicketAction::Delete), "Delete", ButtonStyle::Danger),
		]),
	]
}

pub fn closed_ticket_buttons() -> Vec<Component> {
	vec![action_row(vec![
		button(BotInteraction::Ticket(TicketAction::Reopen), "Reopen", ButtonStyle::Success),
		button(BotInteraction::Ticket(TicketAction::Delete), "Delete", ButtonStyle::Danger),
	])]
}

pub fn giveaway_buttons() -> Vec<Component> {
	vec![action_row(vec![
		button(BotInteraction::Giveaway(GiveawayAction::Enter), "Enter", ButtonStyle::Success),
		button(BotInteraction::Giveaway(GiveawayAction::End), "End Giveaway", ButtonStyle::Danger),
	])]
}
