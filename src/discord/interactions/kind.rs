// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Every button the bot puts on a message. The custom ID of each button is the [fmt::Display] output of its
/// variant, and [BotInteraction::from_custom_id] reverses it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BotInteraction {
	CreateTicket,
	Verify,
	Ticket(TicketAction),
	Giveaway(GiveawayAction),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TicketAction {
	Claim,
	AddParticipant,
	RemoveParticipant,
	Close,
	Reopen,
	Delete,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GiveawayAction {
	Enter,
	End,
}

impl BotInteraction {
	pub fn from_custom_id(custom_id: &str) -> Option<Self> {
		let mut path = custom_id.split('/');
		let interaction = match (path.next(), path.next()) {
			(Some("create_ticket"), None) => Self::CreateTicket,
			(Some("verify"), None) => Self::Verify,
			(Some("ticket"), Some(action)) => Self::Ticket(TicketAction::from_path(action)?),
			(Some("giveaway"), Some(action)) => Self::Giveaway(GiveawayAction::from_path(action)?),
			_ => return None,
		};
		match path.next() {
			Some(_) => None,
			None => Some(interaction),
		}
	}
}

impl TicketAction {
	fn from_path(path: &str) -> Option<Self> {
		match path {
			"claim" => Some(Self::Claim),
			"add" => Some(Self::AddParticipant),
			"remove" => Some(Self::RemoveParticipant),
			"close" => Some(Self::Close),
			"reopen" => Some(Self::Reopen),
			"delete" => Some(Self::Delete),
			_ => None,
		}
	}

	fn path(&self) -> &'static str {
		match self {
			Self::Claim => "claim",
			Self::AddParticipant => "add",
			Self::RemoveParticipant => "remove",
			Self::Close => "close",
			Self::Reopen => "reopen",
			Self::Delete => "delete",
		}
	}
}

impl GiveawayAction {
	fn from_path(path: &str) -> Option<Self> {
		match path {
			"enter" => Some(Self::Enter),
			"end" => Some(Self::End),
			_ => None,
		}
	}

	fn path(&self) -> &'static str {
		match self {
			Self::Enter => "enter",
			Self::End => "end",
		}
	}
}

impl fmt::Display for BotInteraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CreateTicket => write!(f, "create_ticket"),
			Self::Verify => write!(f, "verify"),
			Self::Ticket(action) => write!(f, "ticket/{}", action.path()),
			Self::Giveaway(action) => write!(f, "giveaway/{}", action.path()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_ids() {
		assert_eq!(
			BotInteraction::from_custom_id("ticket/claim"),
			Some(BotInteraction::Ticket(TicketAction::Claim))
		);
		assert_eq!(
			BotInteraction::from_custom_id("giveaway/end"),
			Some(BotInteraction::Giveaway(GiveawayAction::End))
		);
		assert_eq!(BotInteraction::from_custom_id("verify"), Some(BotInteraction::Verify));
	}

	#[test]
	fn display_matches_parser() {
		let interaction = BotInteraction::Ticket(TicketAction::RemoveParticipant);
		assert_eq!(interaction.to_string(), "ticket/remove");
		assert_eq!(BotInteraction::from_custom_id(&interaction.to_string()), Some(interaction));
	}

	#[test]
	fn rejects_unknown_ids() {
		assert_eq!(BotInteraction::from_custom_id("ticket/unclaim"), None);
		assert_eq!(BotInteraction::from_custom_id("ticket"), None);
		assert_eq!(BotInteraction::from_custom_id("verify/extra"), None);
		assert_eq!(BotInteraction::from_custom_id("giveaway/enter/1"), None);
		assert_eq!(BotInteraction::from_custom_id(""), None);
	}
}
