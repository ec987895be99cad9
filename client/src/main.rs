// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use conduit_signup_client::api::http::HttpRegistrationApi;
use conduit_signup_client::api::RegistrationApi;
use conduit_signup_client::app::App;
use std::rc::Rc;
use sycamore::prelude::*;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let api: Rc<dyn RegistrationApi> = Rc::new(HttpRegistrationApi::new());
	sycamore::render(|ctx| view! { ctx, App(api=api) });
}
