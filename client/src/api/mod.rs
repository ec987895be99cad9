// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use conduit_signup_shared::messages::user_register::{NewUser, RegistrationResponse};
use std::fmt;

pub mod http;
pub mod mock;

/// Errors that can occur submitting a registration attempt to the endpoint
#[derive(Debug)]
pub enum RegistrationError {
	Network(gloo_net::Error),
	UnexpectedStatus(u16),
}

impl fmt::Display for RegistrationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "Failed to reach the registration endpoint: {}", error),
			Self::UnexpectedStatus(status) => {
				write!(f, "The registration endpoint answered with status {}", status)
			}
		}
	}
}

impl From<gloo_net::Error> for RegistrationError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

/// A remote service that accepts new account sign-ups.
#[async_trait(?Send)]
pub trait RegistrationApi {
	/// Submits a single registration attempt and resolves it to its outcome.
	/// A rejection by the server is an outcome, not an error; errors cover
	/// transport and protocol failures.
	async fn register_user(&self, new_user: &NewUser) -> Result<RegistrationResponse, RegistrationError>;
}
