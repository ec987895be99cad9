// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{RegistrationApi, RegistrationError};
use async_trait::async_trait;
use conduit_signup_shared::messages::user::UserData;
use conduit_signup_shared::messages::user_register::{NewUser, RegistrationErrors, RegistrationResponse};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::collections::HashMap;

type RegistrationHandler = Box<dyn Fn(&NewUser) -> Result<RegistrationResponse, RegistrationError>>;

/// Stand-in for the registration endpoint. Each request is recorded, delayed
/// by the configured latency, and resolved with the active handler. The
/// default handler accepts every registration with account data matching what
/// the live endpoint returns for a new account.
pub struct MockRegistrationApi {
	handler: RefCell<RegistrationHandler>,
	latency_millis: u32,
	received: RefCell<Vec<NewUser>>,
}

impl MockRegistrationApi {
	pub fn new() -> Self {
		Self::with_latency(0)
	}

	/// Creates a mock whose responses resolve only after the given delay,
	/// keeping the submission pending long enough to observe.
	pub fn with_latency(latency_millis: u32) -> Self {
		Self {
			handler: RefCell::new(Box::new(successful_registration)),
			latency_millis,
			received: RefCell::new(Vec::new()),
		}
	}

	/// Replaces the active handler for subsequent requests, e.g. to have the
	/// endpoint start rejecting registrations.
	pub fn use_handler(
		&self,
		handler: impl Fn(&NewUser) -> Result<RegistrationResponse, RegistrationError> + 'static,
	) {
		*self.handler.borrow_mut() = Box::new(handler);
	}

	/// The requests received so far, oldest first
	pub fn received_requests(&self) -> Vec<NewUser> {
		self.received.borrow().clone()
	}
}

#[async_trait(?Send)]
impl RegistrationApi for MockRegistrationApi {
	async fn register_user(&self, new_user: &NewUser) -> Result<RegistrationResponse, RegistrationError> {
		self.received.borrow_mut().push(new_user.clone());
		TimeoutFuture::new(self.latency_millis).await;
		(*self.handler.borrow())(new_user)
	}
}

/// Accepts a registration with the account data the live endpoint produces
/// for a new account: the submitted identity, empty profile, and a token.
pub fn successful_registration(new_user: &NewUser) -> Result<RegistrationResponse, RegistrationError> {
	Ok(RegistrationResponse::Success(UserData {
		username: new_user.username.clone(),
		email: new_user.email.clone(),
		bio: None,
		image: None,
		token: String::from("fake-jwt-token"),
	}))
}

/// The rejection body the endpoint produces for an address that already has
/// an account
pub fn email_taken_rejection() -> RegistrationErrors {
	let mut errors = HashMap::new();
	errors.insert(
		String::from("email"),
		vec![String::from("has already been taken")],
	);
	RegistrationErrors { errors }
}
