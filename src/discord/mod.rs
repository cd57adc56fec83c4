// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod actions;
pub mod activity;
pub mod collector;
mod commands;
mod connection;
pub mod error;
mod incoming_messages;
mod interactions;
pub mod state;
pub mod utils;
pub mod workflows;

pub use connection::{run_bot, set_up_cache, set_up_client};
