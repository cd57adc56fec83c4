// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::error::BotError;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, MessageMarker, UserMarker};

/// What the host set up when creating the giveaway
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GiveawayDetails {
	pub title: String,
	pub description: String,
	pub reward: String,
	pub image_url: Option<String>,
	pub host: Id<UserMarker>,
	pub co_host: Option<Id<UserMarker>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GiveawayRecord {
	pub details: GiveawayDetails,
	/// Everyone who entered, in the order they entered. Nobody appears twice.
	pub entrants: Vec<Id<UserMarker>>,
	/// Channel of the message displaying the giveaway
	pub channel: Id<ChannelMarker>,
	/// The message displaying the giveaway. Giveaways are keyed by this in the [GiveawayStore].
	pub message: Id<MessageMarker>,
}

impl GiveawayRecord {
	pub fn entry_count(&self) -> usize {
		self.entrants.len()
	}

	pub fn can_end(&self, user: Id<UserMarker>) -> bool {
		self.details.host == user || self.details.co_host == Some(user)
	}
}

/// A giveaway that has been removed from the store along with its drawn winner
#[derive(Debug)]
pub struct EndedGiveaway {
	pub record: GiveawayRecord,
	pub winner: Id<UserMarker>,
}

/// Active giveaways, keyed by the message displaying each one.
///
/// Each operation checks and mutates under one lock acquisition, so operations on the same giveaway never
/// interleave.
#[derive(Debug, Default)]
pub struct GiveawayStore {
	giveaways: Mutex<HashMap<Id<MessageMarker>, GiveawayRecord>>,
}

impl GiveawayStore {
	fn lock(&self) -> MutexGuard<'_, HashMap<Id<MessageMarker>, GiveawayRecord>> {
		self.giveaways.lock().unwrap_or_else(PoisonError::into_inner)
	}

	pub fn insert(&self, record: GiveawayRecord) {
		self.lock().insert(record.message, record);
	}

	pub fn get(&self, message: Id<MessageMarker>) -> Option<GiveawayRecord> {
		self.lock().get(&message).cloned()
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lock().is_empty()
	}

	/// Adds `user` as an entrant, returning the giveaway as it is after the entry.
	pub fn enter(&self, message: Id<MessageMarker>, user: Id<UserMarker>) -> Result<GiveawayRecord, BotError> {
		let mut giveaways = self.lock();
		let Some(record) = giveaways.get_mut(&message) else {
			return Err(BotError::NotFound);
		};
		if record.entrants.contains(&user) {
			return Err(BotError::AlreadyEntered);
		}
		record.entrants.push(user);
		Ok(record.clone())
	}

	/// Ends the giveaway on behalf of `user`, drawing a winner uniformly from the entrants.
	///
	/// On success the giveaway is gone from the store. A giveaway with no entrants stays active.
	pub fn end<R: Rng + ?Sized>(
		&self,
		message: Id<MessageMarker>,
		user: Id<UserMarker>,
		rng: &mut R,
	) -> Result<EndedGiveaway, BotError> {
		let mut giveaways = self.lock();
		let Some(record) = giveaways.get(&message) else {
			return Err(BotError::NotFound);
		};
		if !record.can_end(user) {
			return Err(BotError::Forbidden);
		}
		if record.entrants.is_empty() {
			return Err(BotError::NoEntries);
		}
		let winner_index = rng.gen_range(0..record.entrants.len());
		let winner = record.entrants[winner_index];
		let Some(record) = giveaways.remove(&message) else {
			return Err(BotError::NotFound);
		};
		Ok(EndedGiveaway { record, winner })
	}
}
