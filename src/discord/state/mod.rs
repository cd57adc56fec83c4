// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::actions::DiscordActions;
use super::activity::ActivityClock;
use super::collector::MessageCollectors;
use giveaways::GiveawayStore;
use std::sync::Arc;
use tickets::TicketStore;

pub mod giveaways;
pub mod tickets;

/// Everything the bot keeps in memory between events. Nothing here survives a restart.
pub struct BotState {
	pub tickets: Arc<TicketStore>,
	pub giveaways: GiveawayStore,
	pub activity: Arc<ActivityClock>,
	pub collectors: Arc<MessageCollectors>,
	pub actions: Arc<dyn DiscordActions>,
}

impl BotState {
	pub fn new(actions: Arc<dyn DiscordActions>, collectors: Arc<MessageCollectors>) -> Self {
		Self {
			tickets: Arc::new(TicketStore::default()),
			giveaways: GiveawayStore::default(),
			activity: Arc::new(ActivityClock::new()),
			collectors,
			actions,
		}
	}
}
