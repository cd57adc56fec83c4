// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use miette::Diagnostic;
use std::error::Error;
use std::fmt;
use twilight_util::builder::embed::image_source::ImageSourceUrlError;
use twilight_validate::embed::EmbedValidationError;

/// A failure reported by Discord (or the mock standing in for it) while performing an outbound action.
// Boxed to hold any client error type.
#[derive(Debug, Diagnostic)]
pub struct ActionError(pub Box<dyn Error + Send + Sync>);

impl fmt::Display for ActionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl Error for ActionError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		self.0.source()
	}
}

impl From<twilight_http::Error> for ActionError {
	fn from(error: twilight_http::Error) -> Self {
		Self(Box::new(error))
	}
}

impl From<twilight_http::response::DeserializeBodyError> for ActionError {
	fn from(error: twilight_http::response::DeserializeBodyError) -> Self {
		Self(Box::new(error))
	}
}

/// Every way a ticket, giveaway, or verification action can be refused.
///
/// These never escape an interaction handler; each is turned into a notice for the acting user with
/// [BotError::notice].
#[derive(Debug, Diagnostic)]
pub enum BotError {
	/// The acting member lacks the permission the action requires.
	PermissionDenied,
	/// The ticket or giveaway is unknown, usually because it ended or the bot restarted.
	NotFound,
	/// A ticket channel with the same name exists, or a deletion is already pending.
	AlreadyExists,
	AlreadyClaimed,
	AlreadyEntered,
	/// Nobody answered a follow-up prompt in time.
	NoResponse,
	/// The acting member isn't allowed to act on this particular record.
	Forbidden,
	/// A giveaway can't end without entrants. Informational rather than a failure.
	NoEntries,
	/// The supplied content doesn't fit in a message.
	InvalidContent(Box<dyn Error + Send + Sync>),
	ExternalActionFailed(ActionError),
}

impl BotError {
	/// The text shown privately to the user whose action was refused.
	pub fn notice(&self) -> String {
		match self {
			Self::PermissionDenied => String::from("You don't have permission to do that."),
			Self::NotFound => String::from("This ticket or giveaway is no longer active."),
			Self::AlreadyExists => String::from("That already exists."),
			Self::AlreadyClaimed => String::from("This ticket has already been claimed."),
			Self::AlreadyEntered => String::from("You've already entered this giveaway."),
			Self::NoResponse => String::from("No response was received in time, so nothing was changed."),
			Self::Forbidden => String::from("Only the host or co-host can end this giveaway."),
			Self::NoEntries => String::from("Nobody has entered this giveaway yet."),
			Self::InvalidContent(error) => format!("That can't be posted: {}", error),
			Self::ExternalActionFailed(_) => String::from("Discord rejected the action. Please try again later."),
		}
	}
}

impl fmt::Display for BotError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::PermissionDenied => write!(f, "permission denied"),
			Self::NotFound => write!(f, "not found"),
			Self::AlreadyExists => write!(f, "already exists"),
			Self::AlreadyClaimed => write!(f, "already claimed"),
			Self::AlreadyEntered => write!(f, "already entered"),
			Self::NoResponse => write!(f, "no response"),
			Self::Forbidden => write!(f, "forbidden"),
			Self::NoEntries => write!(f, "no entries"),
			Self::InvalidContent(error) => write!(f, "invalid content: {}", error),
			Self::ExternalActionFailed(error) => write!(f, "external action failed: {}", error),
		}
	}
}

impl Error for BotError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::InvalidContent(error) => Some(error.as_ref()),
			Self::ExternalActionFailed(error) => Some(error),
			_ => None,
		}
	}
}

impl From<ActionError> for BotError {
	fn from(error: ActionError) -> Self {
		Self::ExternalActionFailed(error)
	}
}

impl From<EmbedValidationError> for BotError {
	fn from(error: EmbedValidationError) -> Self {
		Self::InvalidContent(Box::new(error))
	}
}

impl From<ImageSourceUrlError> for BotError {
	fn from(error: ImageSourceUrlError) -> Self {
		Self::InvalidContent(Box::new(error))
	}
}
