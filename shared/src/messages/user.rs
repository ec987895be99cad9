// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Account data as the registration endpoint reports it. The profile fields
/// are null for a freshly-created account.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UserData {
	pub username: String,
	pub email: String,
	pub bio: Option<String>,
	pub image: Option<String>,
	pub token: String,
}
