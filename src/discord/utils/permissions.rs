// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::error::BotError;
use twilight_model::guild::Permissions;

/// Permission needed for every staff action on a ticket channel.
pub const TICKET_STAFF_PERMISSION: Permissions = Permissions::MANAGE_CHANNELS;
/// Permission needed to host a giveaway.
pub const GIVEAWAY_HOST_PERMISSION: Permissions = Permissions::MANAGE_GUILD;
/// Permission needed to post the verification panel.
pub const VERIFICATION_PANEL_PERMISSION: Permissions = Permissions::MANAGE_ROLES;

/// Checks whether a member holding `actor_permissions` may perform an action requiring `required`.
///
/// A missing permission snapshot is always denied, even when nothing is required. Administrators pass every check.
pub fn allowed(required: Permissions, actor_permissions: Option<Permissions>) -> bool {
	match actor_permissions {
		Some(permissions) => permissions.contains(Permissions::ADMINISTRATOR) || permissions.contains(required),
		None => false,
	}
}

/// [allowed], as a [Result] for early return out of a workflow.
pub fn require(required: Permissions, actor_permissions: Option<Permissions>) -> Result<(), BotError> {
	if allowed(required, actor_permissions) {
		Ok(())
	} else {
		Err(BotError::PermissionDenied)
	}
}

// Requesters and added participants get these on their ticket channel.
pub fn ticket_member_permissions() -> Permissions {
	Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::READ_MESSAGE_HISTORY
}

// Removed participants and closed-ticket requesters are denied these.
pub fn ticket_revoked_permissions() -> Permissions {
	Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES
}

pub fn ticket_bot_permissions() -> Permissions {
	ticket_member_permissions() | Permissions::MANAGE_CHANNELS | Permissions::MANAGE_ROLES
}
