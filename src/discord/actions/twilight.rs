// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::DiscordActions;
use crate::config::DiscordConfig;
use crate::discord::collector::MessageCollectors;
use crate::discord::error::ActionError;
use crate::discord::utils::permissions::{
	ticket_bot_permissions, ticket_member_permissions, ticket_revoked_permissions,
};
use crate::discord::utils::responses::OutgoingMessage;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use twilight_cache_inmemory::DefaultInMemoryCache;
use twilight_http::client::Client;
use twilight_http::request::AuditLogReason;
use twilight_model::channel::ChannelType;
use twilight_model::channel::permission_overwrite::{
	PermissionOverwrite as ChannelOverwrite, PermissionOverwriteType as ChannelOverwriteType,
};
use twilight_model::guild::Permissions;
use twilight_model::http::permission_overwrite::{PermissionOverwrite, PermissionOverwriteType};
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GenericMarker, GuildMarker, MessageMarker, RoleMarker, UserMarker};

/// [DiscordActions] backed by the Discord HTTP API and the gateway cache.
pub struct TwilightActions {
	http_client: Arc<Client>,
	cache: Arc<DefaultInMemoryCache>,
	collectors: Arc<MessageCollectors>,
	ticket_category: Id<ChannelMarker>,
	staff_role: Option<Id<RoleMarker>>,
}

impl TwilightActions {
	pub fn new(
		http_client: Arc<Client>,
		cache: Arc<DefaultInMemoryCache>,
		collectors: Arc<MessageCollectors>,
		config: &DiscordConfig,
	) -> Self {
		Self {
			http_client,
			cache,
			collectors,
			ticket_category: config.ticket_category,
			staff_role: config.staff_role,
		}
	}
}

fn overwrite(
	id: Id<GenericMarker>,
	kind: PermissionOverwriteType,
	allow: Option<Permissions>,
	deny: Option<Permissions>,
) -> PermissionOverwrite {
	PermissionOverwrite { allow, deny, id, kind }
}

// Channel creation takes the channel model's overwrites, which always carry both sides.
fn creation_overwrite(
	id: Id<GenericMarker>,
	kind: ChannelOverwriteType,
	allow: Permissions,
	deny: Permissions,
) -> ChannelOverwrite {
	ChannelOverwrite { allow, deny, id, kind }
}

/// The overwrites a new ticket channel starts with: hidden from everyone except the requester, the bot and the
/// staff role if there is one.
fn ticket_channel_overwrites(
	guild: Id<GuildMarker>,
	requester: Id<UserMarker>,
	bot_user: Id<UserMarker>,
	staff_role: Option<Id<RoleMarker>>,
) -> Vec<ChannelOverwrite> {
	let mut permission_overwrites = vec![
		creation_overwrite(
			guild.cast(),
			ChannelOverwriteType::Role,
			Permissions::empty(),
			Permissions::VIEW_CHANNEL,
		),
		creation_overwrite(
			requester.cast(),
			ChannelOverwriteType::Member,
			ticket_member_permissions(),
			Permissions::empty(),
		),
		creation_overwrite(
			bot_user.cast(),
			ChannelOverwriteType::Member,
			ticket_bot_permissions(),
			Permissions::empty(),
		),
	];
	if let Some(staff_role) = staff_role {
		permission_overwrites.push(creation_overwrite(
			staff_role.cast(),
			ChannelOverwriteType::Role,
			ticket_member_permissions(),
			Permissions::empty(),
		));
	}
	permission_overwrites
}

#[async_trait]
impl DiscordActions for TwilightActions {
	async fn find_channel_by_name(
		&self,
		guild: Id<GuildMarker>,
		name: &str,
	) -> Result<Option<Id<ChannelMarker>>, ActionError> {
		let Some(guild_channels) = self.cache.guild_channels(guild) else {
			return Ok(None);
		};
		let found = guild_channels.value().iter().copied().find(|channel_id| {
			self.cache
				.channel(*channel_id)
				.is_some_and(|channel| channel.value().name.as_deref() == Some(name))
		});
		Ok(found)
	}

	async fn create_ticket_channel(
		&self,
		guild: Id<GuildMarker>,
		name: &str,
		requester: Id<UserMarker>,
	) -> Result<Id<ChannelMarker>, ActionError> {
		let bot_user = self.http_client.current_user().await?.model().await?;

		let permission_overwrites = ticket_channel_overwrites(guild, requester, bot_user.id, self.staff_role);

		let channel = self
			.http_client
			.create_guild_channel(guild, name)
			.kind(ChannelType::GuildText)
			.parent_id(self.ticket_category)
			.permission_overwrites(&permission_overwrites)
			.reason("Ticket created")
			.await?
			.model()
			.await?;
		Ok(channel.id)
	}

	async fn set_member_access(
		&self,
		channel: Id<ChannelMarker>,
		user: Id<UserMarker>,
		allowed: bool,
	) -> Result<(), ActionError> {
		let permission_overwrite = if allowed {
			overwrite(
				user.cast(),
				PermissionOverwriteType::Member,
				Some(ticket_member_permissions()),
				None,
			)
		} else {
			overwrite(
				user.cast(),
				PermissionOverwriteType::Member,
				None,
				Some(ticket_revoked_permissions()),
			)
		};
		self.http_client
			.update_channel_permission(channel, &permission_overwrite)
			.await?;
		Ok(())
	}

	async fn set_role_visibility(
		&self,
		channel: Id<ChannelMarker>,
		role: Id<RoleMarker>,
		visible: bool,
	) -> Result<(), ActionError> {
		let (allow, deny) = if visible {
			(Some(Permissions::VIEW_CHANNEL), None)
		} else {
			(None, Some(Permissions::VIEW_CHANNEL))
		};
		let permission_overwrite = overwrite(role.cast(), PermissionOverwriteType::Role, allow, deny);
		self.http_client
			.update_channel_permission(channel, &permission_overwrite)
			.await?;
		Ok(())
	}

	async fn delete_channel(&self, channel: Id<ChannelMarker>) -> Result<(), ActionError> {
		self.http_client.delete_channel(channel).reason("Ticket deleted").await?;
		Ok(())
	}

	async fn send_message(
		&self,
		channel: Id<ChannelMarker>,
		message: &OutgoingMessage,
	) -> Result<Id<MessageMarker>, ActionError> {
		let create_message = message.set_create_message_data(self.http_client.create_message(channel));
		let sent_message = create_message.await?.model().await?;
		Ok(sent_message.id)
	}

	async fn edit_message(
		&self,
		channel: Id<ChannelMarker>,
		message_id: Id<MessageMarker>,
		message: &OutgoingMessage,
	) -> Result<(), ActionError> {
		self.http_client
			.update_message(channel, message_id)
			.content(message.content.as_deref())
			.embeds(Some(message.embeds.as_slice()))
			.components(Some(message.components.as_slice()))
			.allowed_mentions(Some(&message.allowed_mentions))
			.await?;
		Ok(())
	}

	async fn member_display_name(&self, guild: Id<GuildMarker>, user: Id<UserMarker>) -> Result<String, ActionError> {
		// Members may have left the server since acting, so fall back to the plain user.
		match self.http_client.guild_member(guild, user).await {
			Ok(response) => {
				let member = response.model().await?;
				Ok(member.nick.or(member.user.global_name).unwrap_or(member.user.name))
			}
			Err(_) => {
				let user = self.http_client.user(user).await?.model().await?;
				Ok(user.global_name.unwrap_or(user.name))
			}
		}
	}

	async fn find_role_by_name(&self, guild: Id<GuildMarker>, name: &str) -> Result<Option<Id<RoleMarker>>, ActionError> {
		let roles = self.http_client.roles(guild).await?.models().await?;
		Ok(roles.into_iter().find(|role| role.name == name).map(|role| role.id))
	}

	async fn create_role(
		&self,
		guild: Id<GuildMarker>,
		name: &str,
		color: u32,
		reason: &str,
	) -> Result<Id<RoleMarker>, ActionError> {
		let role = self
			.http_client
			.create_role(guild)
			.name(name)
			.color(color)
			.reason(reason)
			.await?
			.model()
			.await?;
		Ok(role.id)
	}

	async fn add_member_role(
		&self,
		guild: Id<GuildMarker>,
		user: Id<UserMarker>,
		role: Id<RoleMarker>,
	) -> Result<(), ActionError> {
		self.http_client.add_guild_member_role(guild, user, role).await?;
		Ok(())
	}

	async fn await_mention(
		&self,
		channel: Id<ChannelMarker>,
		author: Id<UserMarker>,
		wait: Duration,
	) -> Result<Option<Id<UserMarker>>, ActionError> {
		Ok(self.collectors.await_mention(channel, author, wait).await)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_ticket_is_hidden_from_everyone_else() {
		let guild = Id::new(42);
		let overwrites = ticket_channel_overwrites(guild, Id::new(1), Id::new(2), Some(Id::new(3)));
		assert_eq!(overwrites.len(), 4);

		let everyone = &overwrites[0];
		assert_eq!(everyone.id.get(), guild.get());
		assert_eq!(everyone.kind, ChannelOverwriteType::Role);
		assert_eq!(everyone.allow, Permissions::empty());
		assert_eq!(everyone.deny, Permissions::VIEW_CHANNEL);

		let requester = &overwrites[1];
		assert_eq!(requester.kind, ChannelOverwriteType::Member);
		assert_eq!(requester.allow, ticket_member_permissions());
		assert_eq!(requester.deny, Permissions::empty());

		assert_eq!(overwrites[3].id.get(), 3);
		assert_eq!(overwrites[3].kind, ChannelOverwriteType::Role);
	}

	#[test]
	fn staff_role_is_optional() {
		let overwrites = ticket_channel_overwrites(Id::new(42), Id::new(1), Id::new(2), None);
		assert_eq!(overwrites.len(), 3);
	}
}
