// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use community_keeper::config::parse_config;
use community_keeper::discord::actions::TwilightActions;
use community_keeper::discord::activity::run_idle_watchdog;
use community_keeper::discord::collector::MessageCollectors;
use community_keeper::discord::state::BotState;
use community_keeper::discord::{run_bot, set_up_cache, set_up_client};
use miette::bail;
use std::sync::Arc;

#[tokio::main]
async fn main() -> miette::Result<()> {
	tracing_subscriber::fmt::init();

	let config_path = std::env::args().nth(1).unwrap_or_else(|| String::from("config.kdl"));
	let config = parse_config(&config_path).await?;
	if config.discord.bot_token.is_empty() {
		bail!("No bot token was configured; set `bot_token` in {} or DISCORD_TOKEN", config_path);
	}

	let http_client = set_up_client(&config);
	let cache = set_up_cache();
	let collectors = Arc::new(MessageCollectors::default());
	let actions = TwilightActions::new(
		Arc::clone(&http_client),
		Arc::clone(&cache),
		Arc::clone(&collectors),
		&config.discord,
	);
	let bot_state = Arc::new(BotState::new(Arc::new(actions), collectors));

	tokio::spawn(run_idle_watchdog(Arc::clone(&bot_state.activity), config.shutdown));
	tracing::info!("Starting bot");

	run_bot(&config, http_client, cache, bot_state).await
}
