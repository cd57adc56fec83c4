// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Actor;
use crate::discord::actions::DiscordActions;
use crate::discord::error::BotError;
use crate::discord::state::giveaways::{GiveawayDetails, GiveawayRecord, GiveawayStore};
use crate::discord::utils::permissions::{GIVEAWAY_HOST_PERMISSION, require};
use crate::discord::utils::responses::{giveaway_congratulations, giveaway_ended_panel, giveaway_panel};
use rand::Rng;
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, MessageMarker, UserMarker};

/// What the host fills in when starting a giveaway
#[derive(Clone, Debug, Default)]
pub struct GiveawayOptions {
	pub title: String,
	pub description: String,
	pub reward: String,
	pub image_url: Option<String>,
	pub co_host: Option<Id<UserMarker>>,
}

/// Posts a new giveaway in `channel` hosted by the actor and starts tracking it.
pub async fn create_giveaway(
	actions: &dyn DiscordActions,
	giveaways: &GiveawayStore,
	channel: Id<ChannelMarker>,
	actor: &Actor,
	options: GiveawayOptions,
) -> Result<Id<MessageMarker>, BotError> {
	require(GIVEAWAY_HOST_PERMISSION, actor.permissions)?;

	let details = GiveawayDetails {
		title: options.title,
		description: options.description,
		reward: options.reward,
		image_url: options.image_url,
		host: actor.id,
		co_host: options.co_host,
	};
	let panel = giveaway_panel(&details, 0)?;
	let message = actions.send_message(channel, &panel).await?;
	giveaways.insert(GiveawayRecord {
		details,
		entrants: Vec::new(),
		channel,
		message,
	});

	tracing::info!(message = message.get(), host = actor.id.get(), "Giveaway started");
	Ok(message)
}

/// Enters the actor into the giveaway shown by `message`, returning the new entry count.
pub async fn enter_giveaway(
	actions: &dyn DiscordActions,
	giveaways: &GiveawayStore,
	message: Id<MessageMarker>,
	actor: &Actor,
) -> Result<usize, BotError> {
	require(Permissions::empty(), actor.permissions)?;

	let record = giveaways.enter(message, actor.id)?;
	let panel = giveaway_panel(&record.details, record.entry_count())?;
	actions.edit_message(record.channel, record.message, &panel).await?;
	Ok(record.entry_count())
}

/// Ends the giveaway shown by `message` on behalf of the actor, announcing and returning the winner.
pub async fn end_giveaway<R: Rng + ?Sized>(
	actions: &dyn DiscordActions,
	giveaways: &GiveawayStore,
	message: Id<MessageMarker>,
	actor: &Actor,
	rng: &mut R,
) -> Result<Id<UserMarker>, BotError> {
	let ended = giveaways.end(message, actor.id, rng)?;
	let record = ended.record;

	let winner_name = actions.member_display_name(actor.guild, ended.winner).await?;
	let panel = giveaway_ended_panel(&record.details, record.entry_count(), ended.winner, &winner_name)?;
	actions.edit_message(record.channel, record.message, &panel).await?;
	let congratulations = giveaway_congratulations(ended.winner, &record.details.reward);
	actions.send_message(record.channel, &congratulations).await?;

	tracing::info!(message = message.get(), winner = ended.winner.get(), "Giveaway ended");
	Ok(ended.winner)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::discord::actions::mock::MockActions;
	use crate::discord::workflows::test_support::{member, staff};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const CHANNEL: Id<ChannelMarker> = Id::new(77);

	fn summer_raffle() -> GiveawayOptions {
		GiveawayOptions {
			title: String::from("Summer Raffle"),
			description: String::from("Enter for a chance to win"),
			reward: String::from("Gift Card"),
			image_url: None,
			co_host: None,
		}
	}

	fn entries_field(message: &crate::discord::utils::responses::OutgoingMessage) -> String {
		message.embeds[0]
			.fields
			.iter()
			.find(|field| field.name == "Entries")
			.map(|field| field.value.clone())
			.unwrap_or_default()
	}

	#[tokio::test]
	async fn members_cannot_host() {
		let actions = MockActions::default();
		let giveaways = GiveawayStore::default();
		let result = create_giveaway(&actions, &giveaways, CHANNEL, &member(1, "alice"), summer_raffle()).await;
		assert!(matches!(result, Err(BotError::PermissionDenied)));
		assert!(giveaways.is_empty());
		assert!(actions.discord().sent.is_empty());
	}

	#[tokio::test]
	async fn summer_raffle_runs_to_a_winner() {
		let actions = MockActions::default();
		let giveaways = GiveawayStore::default();
		let host = staff(1, "host");
		let entrants = [member(2, "bob"), member(3, "carol"), member(4, "dave")];

		let message = create_giveaway(&actions, &giveaways, CHANNEL, &host, summer_raffle())
			.await
			.unwrap();
		assert_eq!(entries_field(&actions.sent_to(CHANNEL)[0]), "0");

		for (count, entrant) in entrants.iter().enumerate() {
			let entries = enter_giveaway(&actions, &giveaways, message, entrant).await.unwrap();
			assert_eq!(entries, count + 1);
		}
		let repeat = enter_giveaway(&actions, &giveaways, message, &entrants[0]).await;
		assert!(matches!(repeat, Err(BotError::AlreadyEntered)));
		{
			let discord = actions.discord();
			assert_eq!(discord.edited.len(), 3);
			assert_eq!(entries_field(&discord.edited[2].2), "3");
		}

		let mut rng = StdRng::seed_from_u64(3);
		let stranger = end_giveaway(&actions, &giveaways, message, &entrants[1], &mut rng).await;
		assert!(matches!(stranger, Err(BotError::Forbidden)));

		let winner = end_giveaway(&actions, &giveaways, message, &host, &mut rng).await.unwrap();
		assert!(entrants.iter().any(|entrant| entrant.id == winner));
		assert!(giveaways.is_empty());

		let late = enter_giveaway(&actions, &giveaways, message, &member(5, "erin")).await;
		assert!(matches!(late, Err(BotError::NotFound)));

		let discord = actions.discord();
		let (_, edited_message, ended_panel) = discord.edited.last().unwrap();
		assert_eq!(*edited_message, message);
		assert!(ended_panel.components.is_empty());
		let (_, _, congratulations) = discord.sent.last().unwrap();
		assert_eq!(
			congratulations.content,
			Some(format!("🎉 Congratulations <@{}>! You won **Gift Card**!", winner))
		);
	}

	#[tokio::test]
	async fn co_host_can_end() {
		let actions = MockActions::default();
		let giveaways = GiveawayStore::default();
		let options = GiveawayOptions {
			co_host: Some(Id::new(5)),
			..summer_raffle()
		};
		let message = create_giveaway(&actions, &giveaways, CHANNEL, &staff(1, "host"), options)
			.await
			.unwrap();
		enter_giveaway(&actions, &giveaways, message, &member(2, "bob")).await.unwrap();

		let mut rng = StdRng::seed_from_u64(9);
		let winner = end_giveaway(&actions, &giveaways, message, &member(5, "co-host"), &mut rng)
			.await
			.unwrap();
		assert_eq!(winner, Id::new(2));
	}

	#[tokio::test]
	async fn ending_empty_giveaway_keeps_it_running() {
		let actions = MockActions::default();
		let giveaways = GiveawayStore::default();
		let host = staff(1, "host");
		let message = create_giveaway(&actions, &giveaways, CHANNEL, &host, summer_raffle())
			.await
			.unwrap();

		let mut rng = StdRng::seed_from_u64(1);
		let result = end_giveaway(&actions, &giveaways, message, &host, &mut rng).await;
		assert!(matches!(result, Err(BotError::NoEntries)));
		assert_eq!(giveaways.len(), 1);
		assert!(actions.discord().edited.is_empty());
	}

	#[tokio::test]
	async fn invalid_image_is_not_posted() {
		let actions = MockActions::default();
		let giveaways = GiveawayStore::default();
		let options = GiveawayOptions {
			image_url: Some(String::from("not a url")),
			..summer_raffle()
		};
		let result = create_giveaway(&actions, &giveaways, CHANNEL, &staff(1, "host"), options).await;
		assert!(matches!(result, Err(BotError::InvalidContent(_))));
		assert!(giveaways.is_empty());
	}
}
