// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An in-memory stand-in for Discord, recording everything the workflows ask of it.

use super::DiscordActions;
use crate::discord::error::ActionError;
use crate::discord::utils::responses::OutgoingMessage;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, MessageMarker, RoleMarker, UserMarker};

#[derive(Debug, Default)]
pub struct MockChannel {
	pub name: String,
	/// Explicit member overwrites: `true` for granted, `false` for shut out
	pub member_access: HashMap<Id<UserMarker>, bool>,
	pub role_visibility: HashMap<Id<RoleMarker>, bool>,
}

#[derive(Debug, Default)]
pub struct MockDiscord {
	pub channels: HashMap<Id<ChannelMarker>, MockChannel>,
	pub deleted_channels: Vec<Id<ChannelMarker>>,
	pub sent: Vec<(Id<ChannelMarker>, Id<MessageMarker>, OutgoingMessage)>,
	pub edited: Vec<(Id<ChannelMarker>, Id<MessageMarker>, OutgoingMessage)>,
	pub roles: HashMap<String, Id<RoleMarker>>,
	pub created_roles: Vec<(String, u32, String)>,
	pub member_roles: HashSet<(Id<UserMarker>, Id<RoleMarker>)>,
	pub display_names: HashMap<Id<UserMarker>, String>,
	/// Answers handed out by [DiscordActions::await_mention], in order. Empty means nobody answers.
	pub mention_replies: VecDeque<Option<Id<UserMarker>>>,
	pub fail_channel_deletion: bool,
	next_id: u64,
}

impl MockDiscord {
	fn next_id(&mut self) -> u64 {
		self.next_id += 1;
		1000 + self.next_id
	}
}

#[derive(Debug, Default)]
pub struct MockActions {
	discord: Mutex<MockDiscord>,
}

#[derive(Debug)]
struct MockFailure(&'static str);

impl std::fmt::Display for MockFailure {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::error::Error for MockFailure {}

fn failure(message: &'static str) -> ActionError {
	ActionError(Box::new(MockFailure(message)))
}

impl MockActions {
	pub fn discord(&self) -> MutexGuard<'_, MockDiscord> {
		self.discord.lock().unwrap()
	}

	pub fn add_channel(&self, name: &str) -> Id<ChannelMarker> {
		let mut discord = self.discord();
		let id = Id::new(discord.next_id());
		discord.channels.insert(
			id,
			MockChannel {
				name: String::from(name),
				..Default::default()
			},
		);
		id
	}

	pub fn member_access(&self, channel: Id<ChannelMarker>, user: Id<UserMarker>) -> Option<bool> {
		self.discord()
			.channels
			.get(&channel)
			.and_then(|channel| channel.member_access.get(&user).copied())
	}

	pub fn role_visibility(&self, channel: Id<ChannelMarker>, role: Id<RoleMarker>) -> Option<bool> {
		self.discord()
			.channels
			.get(&channel)
			.and_then(|channel| channel.role_visibility.get(&role).copied())
	}

	pub fn sent_to(&self, channel: Id<ChannelMarker>) -> Vec<OutgoingMessage> {
		self.discord()
			.sent
			.iter()
			.filter(|(sent_channel, _, _)| *sent_channel == channel)
			.map(|(_, _, message)| message.clone())
			.collect()
	}
}

#[async_trait]
impl DiscordActions for MockActions {
	async fn find_channel_by_name(
		&self,
		_guild: Id<GuildMarker>,
		name: &str,
	) -> Result<Option<Id<ChannelMarker>>, ActionError> {
		let discord = self.discord();
		Ok(discord
			.channels
			.iter()
			.find(|(_, channel)| channel.name == name)
			.map(|(id, _)| *id))
	}

	async fn create_ticket_channel(
		&self,
		guild: Id<GuildMarker>,
		name: &str,
		requester: Id<UserMarker>,
	) -> Result<Id<ChannelMarker>, ActionError> {
		let id = self.add_channel(name);
		let mut discord = self.discord();
		let Some(channel) = discord.channels.get_mut(&id) else {
			return Err(failure("channel vanished"));
		};
		channel.member_access.insert(requester, true);
		channel.role_visibility.insert(guild.cast(), false);
		Ok(id)
	}

	async fn set_member_access(
		&self,
		channel: Id<ChannelMarker>,
		user: Id<UserMarker>,
		allowed: bool,
	) -> Result<(), ActionError> {
		let mut discord = self.discord();
		let Some(channel) = discord.channels.get_mut(&channel) else {
			return Err(failure("unknown channel"));
		};
		channel.member_access.insert(user, allowed);
		Ok(())
	}

	async fn set_role_visibility(
		&self,
		channel: Id<ChannelMarker>,
		role: Id<RoleMarker>,
		visible: bool,
	) -> Result<(), ActionError> {
		let mut discord = self.discord();
		let Some(channel) = discord.channels.get_mut(&channel) else {
			return Err(failure("unknown channel"));
		};
		channel.role_visibility.insert(role, visible);
		Ok(())
	}

	async fn delete_channel(&self, channel: Id<ChannelMarker>) -> Result<(), ActionError> {
		let mut discord = self.discord();
		if discord.fail_channel_deletion {
			return Err(failure("missing access"));
		}
		discord.channels.remove(&channel);
		discord.deleted_channels.push(channel);
		Ok(())
	}

	async fn send_message(
		&self,
		channel: Id<ChannelMarker>,
		message: &OutgoingMessage,
	) -> Result<Id<MessageMarker>, ActionError> {
		let mut discord = self.discord();
		let id = Id::new(discord.next_id());
		discord.sent.push((channel, id, message.clone()));
		Ok(id)
	}

	async fn edit_message(
		&self,
		channel: Id<ChannelMarker>,
		message_id: Id<MessageMarker>,
		message: &OutgoingMessage,
	) -> Result<(), ActionError> {
		self.discord().edited.push((channel, message_id, message.clone()));
		Ok(())
	}

	async fn member_display_name(&self, _guild: Id<GuildMarker>, user: Id<UserMarker>) -> Result<String, ActionError> {
		let discord = self.discord();
		Ok(discord
			.display_names
			.get(&user)
			.cloned()
			.unwrap_or_else(|| format!("user{}", user.get())))
	}

	async fn find_role_by_name(&self, _guild: Id<GuildMarker>, name: &str) -> Result<Option<Id<RoleMarker>>, ActionError> {
		Ok(self.discord().roles.get(name).copied())
	}

	async fn create_role(
		&self,
		_guild: Id<GuildMarker>,
		name: &str,
		color: u32,
		reason: &str,
	) -> Result<Id<RoleMarker>, ActionError> {
		let mut discord = self.discord();
		let id = Id::new(discord.next_id());
		discord.roles.insert(String::from(name), id);
		discord
			.created_roles
			.push((String::from(name), color, String::from(reason)));
		Ok(id)
	}

	async fn add_member_role(
		&self,
		_guild: Id<GuildMarker>,
		user: Id<UserMarker>,
		role: Id<RoleMarker>,
	) -> Result<(), ActionError> {
		self.discord().member_roles.insert((user, role));
		Ok(())
	}

	async fn await_mention(
		&self,
		_channel: Id<ChannelMarker>,
		_author: Id<UserMarker>,
		_wait: Duration,
	) -> Result<Option<Id<UserMarker>>, ActionError> {
		Ok(self.discord().mention_replies.pop_front().flatten())
	}
}
