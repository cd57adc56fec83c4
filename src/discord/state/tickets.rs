// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::error::BotError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::task::AbortHandle;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, UserMarker};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TicketStatus {
	Open,
	Closed,
	/// A deletion has been scheduled and not cancelled
	Deleting,
}

#[derive(Debug)]
pub struct TicketRecord {
	/// The user the ticket was opened for. Unknown for tickets first seen through a claim.
	pub requester: Option<Id<UserMarker>>,
	pub claimant: Option<Id<UserMarker>>,
	pub status: TicketStatus,
	pending_deletion: Option<AbortHandle>,
}

impl TicketRecord {
	fn new(requester: Option<Id<UserMarker>>) -> Self {
		Self {
			requester,
			claimant: None,
			status: TicketStatus::Open,
			pending_deletion: None,
		}
	}
}

/// Ticket channels the bot knows about, keyed by channel.
///
/// Each operation checks and mutates under one lock acquisition, so operations on the same ticket never interleave.
#[derive(Debug, Default)]
pub struct TicketStore {
	tickets: Mutex<HashMap<Id<ChannelMarker>, TicketRecord>>,
}

impl TicketStore {
	fn lock(&self) -> MutexGuard<'_, HashMap<Id<ChannelMarker>, TicketRecord>> {
		self.tickets.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Registers a newly created ticket channel.
	pub fn open(&self, channel: Id<ChannelMarker>, requester: Id<UserMarker>) {
		self.lock().insert(channel, TicketRecord::new(Some(requester)));
	}

	pub fn contains(&self, channel: Id<ChannelMarker>) -> bool {
		self.lock().contains_key(&channel)
	}

	pub fn claimant(&self, channel: Id<ChannelMarker>) -> Option<Id<UserMarker>> {
		self.lock().get(&channel).and_then(|ticket| ticket.claimant)
	}

	pub fn requester(&self, channel: Id<ChannelMarker>) -> Option<Id<UserMarker>> {
		self.lock().get(&channel).and_then(|ticket| ticket.requester)
	}

	pub fn status(&self, channel: Id<ChannelMarker>) -> Option<TicketStatus> {
		self.lock().get(&channel).map(|ticket| ticket.status)
	}

	/// Records `claimant` as the owner of the ticket. A ticket can only ever be claimed once.
	pub fn claim(&self, channel: Id<ChannelMarker>, claimant: Id<UserMarker>) -> Result<(), BotError> {
		let mut tickets = self.lock();
		let ticket = tickets.entry(channel).or_insert_with(|| TicketRecord::new(None));
		if ticket.claimant.is_some() {
			return Err(BotError::AlreadyClaimed);
		}
		ticket.claimant = Some(claimant);
		Ok(())
	}

	/// Marks the ticket closed, returning its requester if known. A ticket due for deletion stays due.
	pub fn close(&self, channel: Id<ChannelMarker>) -> Option<Id<UserMarker>> {
		let mut tickets = self.lock();
		let ticket = tickets.entry(channel).or_insert_with(|| TicketRecord::new(None));
		if ticket.status != TicketStatus::Deleting {
			ticket.status = TicketStatus::Closed;
		}
		ticket.requester
	}

	/// Marks the ticket open again, cancelling any pending deletion, and returns the requester to let back in.
	pub fn reopen(&self, channel: Id<ChannelMarker>) -> Result<Id<UserMarker>, BotError> {
		let mut tickets = self.lock();
		let Some(ticket) = tickets.get_mut(&channel) else {
			return Err(BotError::NotFound);
		};
		let Some(requester) = ticket.requester else {
			return Err(BotError::NotFound);
		};
		if let Some(deletion) = ticket.pending_deletion.take() {
			deletion.abort();
		}
		ticket.status = TicketStatus::Open;
		Ok(requester)
	}

	/// Moves the ticket into the deleting state. Fails if a deletion is already pending.
	pub fn begin_deletion(&self, channel: Id<ChannelMarker>) -> Result<(), BotError> {
		let mut tickets = self.lock();
		let ticket = tickets.entry(channel).or_insert_with(|| TicketRecord::new(None));
		if ticket.status == TicketStatus::Deleting {
			return Err(BotError::AlreadyExists);
		}
		ticket.status = TicketStatus::Deleting;
		Ok(())
	}

	/// Attaches the task that will delete the channel, so that reopening can cancel it.
	///
	/// If the ticket left the deleting state since [Self::begin_deletion], the task is cancelled immediately.
	pub fn attach_deletion(&self, channel: Id<ChannelMarker>, deletion: AbortHandle) {
		let mut tickets = self.lock();
		match tickets.get_mut(&channel) {
			Some(ticket) if ticket.status == TicketStatus::Deleting => ticket.pending_deletion = Some(deletion),
			_ => deletion.abort(),
		}
	}

	/// Removes the ticket if it's still due for deletion. Returns whether the channel should be deleted.
	pub fn finish_deletion(&self, channel: Id<ChannelMarker>) -> bool {
		let mut tickets = self.lock();
		let due = matches!(tickets.get(&channel), Some(ticket) if ticket.status == TicketStatus::Deleting);
		if due {
			tickets.remove(&channel);
		}
		due
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn claim_succeeds_once() {
		let store = TicketStore::default();
		let channel = Id::new(100);
		store.open(channel, Id::new(1));
		store.claim(channel, Id::new(2)).unwrap();
		assert!(matches!(store.claim(channel, Id::new(3)), Err(BotError::AlreadyClaimed)));
		assert!(matches!(store.claim(channel, Id::new(2)), Err(BotError::AlreadyClaimed)));
		assert_eq!(store.claimant(channel), Some(Id::new(2)));
	}

	#[test]
	fn claiming_unknown_channel_creates_record() {
		let store = TicketStore::default();
		let channel = Id::new(100);
		store.claim(channel, Id::new(2)).unwrap();
		assert!(store.contains(channel));
		assert_eq!(store.requester(channel), None);
	}

	#[test]
	fn reopen_returns_requester() {
		let store = TicketStore::default();
		let channel = Id::new(100);
		store.open(channel, Id::new(1));
		assert_eq!(store.close(channel), Some(Id::new(1)));
		assert_eq!(store.status(channel), Some(TicketStatus::Closed));
		assert_eq!(store.reopen(channel).unwrap(), Id::new(1));
		assert_eq!(store.status(channel), Some(TicketStatus::Open));
	}

	#[test]
	fn reopen_without_requester_is_not_found() {
		let store = TicketStore::default();
		let channel = Id::new(100);
		store.claim(channel, Id::new(2)).unwrap();
		assert!(matches!(store.reopen(channel), Err(BotError::NotFound)));
		assert!(matches!(store.reopen(Id::new(101)), Err(BotError::NotFound)));
	}

	#[test]
	fn second_deletion_is_rejected() {
		let store = TicketStore::default();
		let channel = Id::new(100);
		store.open(channel, Id::new(1));
		store.begin_deletion(channel).unwrap();
		assert!(matches!(store.begin_deletion(channel), Err(BotError::AlreadyExists)));
	}

	#[test]
	fn reopened_ticket_is_not_deleted() {
		let store = TicketStore::default();
		let channel = Id::new(100);
		store.open(channel, Id::new(1));
		store.begin_deletion(channel).unwrap();
		store.reopen(channel).unwrap();
		assert!(!store.finish_deletion(channel));
		assert!(store.contains(channel));
	}

	#[test]
	fn closing_keeps_pending_deletion() {
		let store = TicketStore::default();
		let channel = Id::new(100);
		store.open(channel, Id::new(1));
		store.begin_deletion(channel).unwrap();
		assert_eq!(store.close(channel), Some(Id::new(1)));
		assert_eq!(store.status(channel), Some(TicketStatus::Deleting));
		assert!(matches!(store.begin_deletion(channel), Err(BotError::AlreadyExists)));
		assert!(store.finish_deletion(channel));
	}

	#[test]
	fn finished_deletion_removes_record() {
		let store = TicketStore::default();
		let channel = Id::new(100);
		store.open(channel, Id::new(1));
		store.begin_deletion(channel).unwrap();
		assert!(store.finish_deletion(channel));
		assert!(!store.contains(channel));
	}
}
