// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::ActionError;
use super::utils::responses::OutgoingMessage;
use async_trait::async_trait;
use std::time::Duration;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, MessageMarker, RoleMarker, UserMarker};

#[cfg(test)]
pub mod mock;
mod twilight;

pub use twilight::TwilightActions;

/// The outbound side of the bot: everything the workflows ask Discord to do.
#[async_trait]
pub trait DiscordActions: Send + Sync {
	async fn find_channel_by_name(
		&self,
		guild: Id<GuildMarker>,
		name: &str,
	) -> Result<Option<Id<ChannelMarker>>, ActionError>;

	/// Creates a text channel that only `requester`, staff, and the bot can see.
	async fn create_ticket_channel(
		&self,
		guild: Id<GuildMarker>,
		name: &str,
		requester: Id<UserMarker>,
	) -> Result<Id<ChannelMarker>, ActionError>;

	/// Grants `user` access to talk in `channel`, or shuts them out of it.
	async fn set_member_access(
		&self,
		channel: Id<ChannelMarker>,
		user: Id<UserMarker>,
		allowed: bool,
	) -> Result<(), ActionError>;

	/// Shows or hides `channel` for everyone holding `role`.
	async fn set_role_visibility(
		&self,
		channel: Id<ChannelMarker>,
		role: Id<RoleMarker>,
		visible: bool,
	) -> Result<(), ActionError>;

	async fn delete_channel(&self, channel: Id<ChannelMarker>) -> Result<(), ActionError>;

	async fn send_message(
		&self,
		channel: Id<ChannelMarker>,
		message: &OutgoingMessage,
	) -> Result<Id<MessageMarker>, ActionError>;

	async fn edit_message(
		&self,
		channel: Id<ChannelMarker>,
		message_id: Id<MessageMarker>,
		message: &OutgoingMessage,
	) -> Result<(), ActionError>;

	async fn member_display_name(&self, guild: Id<GuildMarker>, user: Id<UserMarker>) -> Result<String, ActionError>;

	async fn find_role_by_name(&self, guild: Id<GuildMarker>, name: &str) -> Result<Option<Id<RoleMarker>>, ActionError>;

	async fn create_role(
		&self,
		guild: Id<GuildMarker>,
		name: &str,
		color: u32,
		reason: &str,
	) -> Result<Id<RoleMarker>, ActionError>;

	async fn add_member_role(
		&self,
		guild: Id<GuildMarker>,
		user: Id<UserMarker>,
		role: Id<RoleMarker>,
	) -> Result<(), ActionError>;

	/// Waits up to `wait` for `author` to mention somebody in `channel`, returning the first user mentioned.
	async fn await_mention(
		&self,
		channel: Id<ChannelMarker>,
		author: Id<UserMarker>,
		wait: Duration,
	) -> Result<Option<Id<UserMarker>>, ActionError>;
}
