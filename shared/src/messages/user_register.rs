// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::user::UserData;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Data sent to the registration endpoint when signing up for an account
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewUser {
	pub username: String,
	pub email: String,
	pub password: String,
}

/// Success body from the registration endpoint (any 2xx status)
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisteredUser {
	pub user: UserData,
}

/// Rejection body from the registration endpoint, keyed by the field the
/// server objected to. Observed with status 422.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RegistrationErrors {
	pub errors: HashMap<String, Vec<String>>,
}

/// Outcome of a single registration attempt
#[derive(Debug)]
pub enum RegistrationResponse {
	Success(UserData),
	Rejected(RegistrationErrors),
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn success_body_parses_with_null_profile_fields() {
		let body = r#"{"user":{"username":"testuser","email":"test@example.com","bio":null,"image":null,"token":"fake-jwt-token"}}"#;
		let parsed: RegisteredUser = serde_json::from_str(body).unwrap();
		assert_eq!(parsed.user.username, "testuser");
		assert_eq!(parsed.user.email, "test@example.com");
		assert!(parsed.user.bio.is_none());
		assert!(parsed.user.image.is_none());
		assert_eq!(parsed.user.token, "fake-jwt-token");
	}

	#[test]
	fn rejection_body_parses_field_message_lists() {
		let body = r#"{"errors":{"email":["has already been taken"]}}"#;
		let parsed: RegistrationErrors = serde_json::from_str(body).unwrap();
		assert_eq!(parsed.errors["email"], vec!["has already been taken"]);
	}

	#[test]
	fn new_user_serializes_the_three_fields() {
		let new_user = NewUser {
			username: String::from("alice"),
			email: String::from("alice@example.com"),
			password: String::from("password123"),
		};
		let serialized = serde_json::to_value(&new_user).unwrap();
		let expected = json!({
			"username": "alice",
			"email": "alice@example.com",
			"password": "password123",
		});
		assert_eq!(serialized, expected);
	}
}
