// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Actor;
use crate::discord::actions::DiscordActions;
use crate::discord::error::BotError;
use crate::discord::utils::permissions::{VERIFICATION_PANEL_PERMISSION, require};
use crate::discord::utils::responses::{OutgoingMessage, verification_panel_post};
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::RoleMarker;

pub const VERIFIED_ROLE_NAME: &str = "Verified";
const VERIFIED_ROLE_COLOR: u32 = 0x2ecc71;
const VERIFIED_ROLE_REASON: &str = "Verification role";

pub fn verification_panel(actor: &Actor) -> Result<OutgoingMessage, BotError> {
	require(VERIFICATION_PANEL_PERMISSION, actor.permissions)?;
	Ok(verification_panel_post()?)
}

/// Gives the actor the verified role, creating the role first if the guild doesn't have one yet.
pub async fn verify_member(actions: &dyn DiscordActions, actor: &Actor) -> Result<Id<RoleMarker>, BotError> {
	require(Permissions::empty(), actor.permissions)?;

	let role = match actions.find_role_by_name(actor.guild, VERIFIED_ROLE_NAME).await? {
		Some(role) => role,
		None => {
			tracing::info!(guild = actor.guild.get(), "Creating verified role");
			actions
				.create_role(actor.guild, VERIFIED_ROLE_NAME, VERIFIED_ROLE_COLOR, VERIFIED_ROLE_REASON)
				.await?
		}
	};
	actions.add_member_role(actor.guild, actor.id, role).await?;
	Ok(role)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::discord::actions::mock::MockActions;
	use crate::discord::workflows::test_support::member;

	#[tokio::test]
	async fn role_is_created_once_and_reused() {
		let actions = MockActions::default();

		let first = verify_member(&actions, &member(1, "alice")).await.unwrap();
		let second = verify_member(&actions, &member(2, "bob")).await.unwrap();
		assert_eq!(first, second);

		let discord = actions.discord();
		assert_eq!(
			discord.created_roles,
			vec![(String::from("Verified"), 0x2ecc71, String::from("Verification role"))]
		);
		assert!(discord.member_roles.contains(&(Id::new(1), first)));
		assert!(discord.member_roles.contains(&(Id::new(2), first)));
	}

	#[test]
	fn verification_panel_needs_manage_roles() {
		assert!(matches!(verification_panel(&member(1, "alice")), Err(BotError::PermissionDenied)));
		let moderator = Actor {
			permissions: Some(Permissions::MANAGE_ROLES),
			..member(2, "mod")
		};
		assert!(verification_panel(&moderator).is_ok());
	}

	#[tokio::test]
	async fn existing_role_is_used() {
		let actions = MockActions::default();
		let existing = Id::new(555);
		actions.discord().roles.insert(String::from("Verified"), existing);

		assert_eq!(verify_member(&actions, &member(1, "alice")).await.unwrap(), existing);
		assert!(actions.discord().created_roles.is_empty());
	}

	#[tokio::test]
	async fn verifying_twice_is_harmless() {
		let actions = MockActions::default();
		let alice = member(1, "alice");
		let first = verify_member(&actions, &alice).await.unwrap();
		let second = verify_member(&actions, &alice).await.unwrap();
		assert_eq!(first, second);
		assert_eq!(actions.discord().member_roles.len(), 1);
	}
}
