// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use twilight_model::application::interaction::Interaction;
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{GuildMarker, UserMarker};

pub mod giveaways;
pub mod tickets;
pub mod verification;

/// The guild member on whose behalf a workflow runs
#[derive(Clone, Debug)]
pub struct Actor {
	pub id: Id<UserMarker>,
	pub name: String,
	pub guild: Id<GuildMarker>,
	/// The member's permissions in the channel they acted in, as reported with the interaction
	pub permissions: Option<Permissions>,
}

impl Actor {
	/// Gets the acting member of an interaction. Interactions from outside a guild have no actor.
	pub fn from_interaction(interaction: &Interaction) -> Option<Self> {
		let guild = interaction.guild_id?;
		let member = interaction.member.as_ref()?;
		let user = member.user.as_ref()?;
		Some(Self {
			id: user.id,
			name: user.name.clone(),
			guild,
			permissions: member.permissions,
		})
	}
}

#[cfg(test)]
pub(crate) mod test_support {
	use super::Actor;
	use twilight_model::guild::Permissions;
	use twilight_model::id::Id;

	pub fn member(id: u64, name: &str) -> Actor {
		Actor {
			id: Id::new(id),
			name: String::from(name),
			guild: Id::new(42),
			permissions: Some(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES),
		}
	}

	pub fn staff(id: u64, name: &str) -> Actor {
		Actor {
			permissions: Some(Permissions::MANAGE_CHANNELS | Permissions::MANAGE_GUILD),
			..member(id, name)
		}
	}
}
