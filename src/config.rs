// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlValue};
use miette::{IntoDiagnostic, Result, miette};
use std::time::Duration;
use tokio::fs::read_to_string;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, RoleMarker};

const DEFAULT_IDLE_HOURS: u64 = 42;
const DEFAULT_CHECK_INTERVAL_MINUTES: u64 = 60;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	let mut config = parse_config_document(&config_file_contents)?;
	if let Ok(token) = std::env::var("DISCORD_TOKEN") {
		config.discord.bot_token = token;
	}
	Ok(config)
}

/// Parses the contents of a configuration document. Environment overrides are not applied.
pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let Some(discord) = document.get("discord").and_then(|node| node.children()) else {
		return Err(miette!("The configuration is missing the `discord` block"));
	};
	let bot_token = match discord.get_arg("bot_token").and_then(KdlValue::as_string) {
		Some(token) => token.to_string(),
		None => String::new(),
	};
	let Some(ticket_category) = id_arg(discord, "ticket_category")? else {
		return Err(miette!("The `discord` block is missing `ticket_category`"));
	};
	let staff_role = id_arg(discord, "staff_role")?;

	let shutdown = document.get("shutdown").and_then(|node| node.children());
	let idle_hours = match shutdown {
		Some(shutdown) => positive_arg(shutdown, "idle_hours")?,
		None => None,
	};
	let check_interval_minutes = match shutdown {
		Some(shutdown) => positive_arg(shutdown, "check_interval_minutes")?,
		None => None,
	};

	Ok(ConfigData {
		discord: DiscordConfig {
			bot_token,
			ticket_category,
			staff_role,
		},
		shutdown: ShutdownConfig {
			idle_threshold: Duration::from_secs(idle_hours.unwrap_or(DEFAULT_IDLE_HOURS) * 3600),
			check_interval: Duration::from_secs(check_interval_minutes.unwrap_or(DEFAULT_CHECK_INTERVAL_MINUTES) * 60),
		},
	})
}

fn positive_arg(document: &KdlDocument, name: &str) -> Result<Option<u64>> {
	let Some(value) = document.get_arg(name) else {
		return Ok(None);
	};
	match value.as_integer().and_then(|value| u64::try_from(value).ok()) {
		Some(value) if value > 0 => Ok(Some(value)),
		_ => Err(miette!("`{}` must be a positive integer", name)),
	}
}

fn id_arg<T>(document: &KdlDocument, name: &str) -> Result<Option<Id<T>>> {
	match positive_arg(document, name)? {
		Some(value) => Ok(Id::new_checked(value)),
		None => Ok(None),
	}
}

#[derive(Debug)]
pub struct ConfigData {
	pub discord: DiscordConfig,
	pub shutdown: ShutdownConfig,
}

#[derive(Debug)]
pub struct DiscordConfig {
	pub bot_token: String,
	/// The category under which ticket channels are created
	pub ticket_category: Id<ChannelMarker>,
	/// A role given access to every ticket channel in addition to the requester
	pub staff_role: Option<Id<RoleMarker>>,
}

#[derive(Clone, Copy, Debug)]
pub struct ShutdownConfig {
	/// How long the bot may go without receiving any gateway event before exiting
	pub idle_threshold: Duration,
	pub check_interval: Duration,
}
