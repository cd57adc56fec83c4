// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::timeout;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, UserMarker};

type WaiterKey = (Id<ChannelMarker>, Id<UserMarker>);

struct Waiter {
	id: u64,
	sender: oneshot::Sender<Id<UserMarker>>,
}

/// Hands incoming messages to prompts waiting on a specific author in a specific channel.
///
/// Only one prompt may wait per author and channel; starting another replaces the first, which then gives up as
/// though it timed out.
#[derive(Default)]
pub struct MessageCollectors {
	next_id: AtomicU64,
	waiting: Mutex<HashMap<WaiterKey, Waiter>>,
}

impl MessageCollectors {
	fn lock(&self) -> MutexGuard<'_, HashMap<WaiterKey, Waiter>> {
		self.waiting.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Waits up to `wait` for `author` to send a message in `channel` that mentions somebody, and returns the
	/// first user mentioned. Messages without mentions are ignored.
	pub async fn await_mention(
		&self,
		channel: Id<ChannelMarker>,
		author: Id<UserMarker>,
		wait: Duration,
	) -> Option<Id<UserMarker>> {
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		let (sender, receiver) = oneshot::channel();
		self.lock().insert((channel, author), Waiter { id, sender });

		let result = timeout(wait, receiver).await;

		let mut waiting = self.lock();
		if waiting.get(&(channel, author)).is_some_and(|waiter| waiter.id == id) {
			waiting.remove(&(channel, author));
		}
		drop(waiting);

		match result {
			Ok(Ok(mentioned)) => Some(mentioned),
			_ => None,
		}
	}

	/// Offers a message to whatever is waiting on its author in its channel. Returns whether it was taken.
	pub fn offer(&self, channel: Id<ChannelMarker>, author: Id<UserMarker>, mentions: &[Id<UserMarker>]) -> bool {
		let Some(mentioned) = mentions.first() else {
			return false;
		};
		let Some(waiter) = self.lock().remove(&(channel, author)) else {
			return false;
		};
		waiter.sender.send(*mentioned).is_ok()
	}

	pub fn pending(&self) -> usize {
		self.lock().len()
	}
}
