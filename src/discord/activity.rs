// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ShutdownConfig;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::time::{MissedTickBehavior, interval};

/// When the bot last received anything from the gateway.
#[derive(Debug)]
pub struct ActivityClock {
	last_activity_millis: AtomicI64,
}

impl ActivityClock {
	pub fn new() -> Self {
		Self::starting_at(Utc::now())
	}

	pub fn starting_at(time: DateTime<Utc>) -> Self {
		Self {
			last_activity_millis: AtomicI64::new(time.timestamp_millis()),
		}
	}

	pub fn touch(&self) {
		self.touch_at(Utc::now());
	}

	/// Records activity at `time`. The clock never moves backwards.
	pub fn touch_at(&self, time: DateTime<Utc>) {
		self.last_activity_millis
			.fetch_max(time.timestamp_millis(), Ordering::Relaxed);
	}

	pub fn last_activity(&self) -> Option<DateTime<Utc>> {
		DateTime::from_timestamp_millis(self.last_activity_millis.load(Ordering::Relaxed))
	}

	pub fn idle_for(&self, now: DateTime<Utc>) -> TimeDelta {
		let last = self.last_activity_millis.load(Ordering::Relaxed);
		TimeDelta::milliseconds(now.timestamp_millis().saturating_sub(last).max(0))
	}

	/// Whether the idle time at `now` has reached `threshold`.
	pub fn is_idle(&self, now: DateTime<Utc>, threshold: std::time::Duration) -> bool {
		match TimeDelta::from_std(threshold) {
			Ok(threshold) => self.idle_for(now) >= threshold,
			Err(_) => false,
		}
	}
}

impl Default for ActivityClock {
	fn default() -> Self {
		Self::new()
	}
}

/// Exits the process once the bot has gone `config.idle_threshold` without activity, checking every
/// `config.check_interval`. Pending prompts and scheduled deletions are abandoned.
pub async fn run_idle_watchdog(clock: Arc<ActivityClock>, config: ShutdownConfig) {
	let mut check = interval(config.check_interval);
	check.set_missed_tick_behavior(MissedTickBehavior::Delay);
	// The first tick completes immediately.
	check.tick().await;
	loop {
		check.tick().await;
		let now = Utc::now();
		if clock.is_idle(now, config.idle_threshold) {
			tracing::warn!(
				idle_minutes = clock.idle_for(now).num_minutes(),
				"No activity within the idle threshold; shutting down"
			);
			std::process::exit(0);
		}
		tracing::debug!(idle_minutes = clock.idle_for(now).num_minutes(), "Idle check passed");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn at(seconds: i64) -> DateTime<Utc> {
		DateTime::from_timestamp(seconds, 0).unwrap()
	}

	#[test]
	fn touch_never_moves_backwards() {
		let clock = ActivityClock::starting_at(at(1000));
		clock.touch_at(at(500));
		assert_eq!(clock.last_activity(), Some(at(1000)));
		clock.touch_at(at(2000));
		assert_eq!(clock.last_activity(), Some(at(2000)));
	}

	#[test]
	fn idle_once_threshold_is_reached() {
		let clock = ActivityClock::starting_at(at(0));
		let threshold = Duration::from_secs(42 * 3600);
		assert!(!clock.is_idle(at(42 * 3600 - 1), threshold));
		assert!(clock.is_idle(at(42 * 3600), threshold));
		assert!(clock.is_idle(at(50 * 3600), threshold));
	}

	#[test]
	fn activity_resets_idle_time() {
		let clock = ActivityClock::starting_at(at(0));
		clock.touch_at(at(40 * 3600));
		assert!(!clock.is_idle(at(43 * 3600), Duration::from_secs(42 * 3600)));
		assert_eq!(clock.idle_for(at(43 * 3600)), TimeDelta::hours(3));
	}

	#[test]
	fn clock_ahead_of_now_is_not_idle() {
		let clock = ActivityClock::starting_at(at(100));
		assert_eq!(clock.idle_for(at(50)), TimeDelta::zero());
	}
}
