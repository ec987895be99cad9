// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{RegistrationApi, RegistrationError};
use async_trait::async_trait;
use conduit_signup_shared::messages::user_register::{
	NewUser, RegisteredUser, RegistrationErrors, RegistrationResponse,
};
use gloo_net::http::Request;
use web_sys::Url;

/// Gets the URL of the registration endpoint in a way that adapts to whatever
/// origin the application is served from.
///
/// # Panics
///
/// This function panics when the browser context (window, location, URL, etc.) is inaccessible.
pub fn registration_endpoint() -> String {
	let js_location = web_sys::window()
		.expect("Failed to get browser window context")
		.location();
	let web_endpoint = js_location.href().expect("Failed to get current address");
	let url = Url::new(&web_endpoint).expect("Failed to generate URL instance");
	url.set_search(""); // Query string is unnecessary and should be cleared
	url.set_hash("");
	url.set_pathname("/api/users");
	url.to_string().into()
}

/// Client for the live registration endpoint
pub struct HttpRegistrationApi {
	endpoint: String,
}

impl HttpRegistrationApi {
	pub fn new() -> Self {
		Self {
			endpoint: registration_endpoint(),
		}
	}
}

#[async_trait(?Send)]
impl RegistrationApi for HttpRegistrationApi {
	async fn register_user(&self, new_user: &NewUser) -> Result<RegistrationResponse, RegistrationError> {
		let response = Request::post(&self.endpoint).json(new_user)?.send().await?;

		if response.ok() {
			let success: RegisteredUser = response.json().await?;
			return Ok(RegistrationResponse::Success(success.user));
		}
		if response.status() == 422 {
			let rejection: RegistrationErrors = response.json().await?;
			return Ok(RegistrationResponse::Rejected(rejection));
		}
		Err(RegistrationError::UnexpectedStatus(response.status()))
	}
}
