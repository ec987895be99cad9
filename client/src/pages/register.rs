// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::RegistrationApi;
use crate::session::{Notification, SessionSignals};
use conduit_signup_shared::messages::user_register::{NewUser, RegistrationResponse};
use conduit_signup_shared::validation::validate_new_user;
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Sign Up Successfully!";
pub const SIGNUP_FAILURE_MESSAGE: &str = "Error Signing Up!";

#[component]
pub fn SignUpView<G: Html>(ctx: Scope<'_>) -> View<G> {
	{
		let session: &SessionSignals = use_context(ctx);
		if session.user.get().is_some() {
			spawn_local_scoped(ctx, async {
				navigate("/");
			});
			return view! { ctx, };
		}
	}

	let username_signal = create_signal(ctx, String::new());
	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());

	// Field messages only appear once their field has been visited, so an
	// untouched form doesn't open covered in errors.
	let username_touched_signal = create_signal(ctx, false);
	let email_touched_signal = create_signal(ctx, false);
	let password_touched_signal = create_signal(ctx, false);

	let submission_pending_signal = create_signal(ctx, false);

	let field_errors_signal = create_memo(ctx, || {
		let new_user = NewUser {
			username: (*username_signal.get()).clone(),
			email: (*email_signal.get()).clone(),
			password: (*password_signal.get()).clone(),
		};
		validate_new_user(&new_user)
	});

	let username_error_signal = create_memo(ctx, || {
		if *username_touched_signal.get() {
			field_errors_signal.get().username
		} else {
			None
		}
	});
	let email_error_signal = create_memo(ctx, || {
		if *email_touched_signal.get() {
			field_errors_signal.get().email
		} else {
			None
		}
	});
	let password_error_signal = create_memo(ctx, || {
		if *password_touched_signal.get() {
			field_errors_signal.get().password
		} else {
			None
		}
	});

	let username_class_signal = create_memo(ctx, || {
		if username_error_signal.get().is_some() {
			"error"
		} else {
			""
		}
	});
	let email_class_signal = create_memo(ctx, || if email_error_signal.get().is_some() { "error" } else { "" });
	let password_class_signal = create_memo(ctx, || {
		if password_error_signal.get().is_some() {
			"error"
		} else {
			""
		}
	});

	// The submit gate: all three fields filled in, every rule met, and no
	// submission already on the wire.
	let submit_disabled_signal = create_memo(ctx, || {
		*submission_pending_signal.get()
			|| username_signal.get().is_empty()
			|| email_signal.get().is_empty()
			|| password_signal.get().is_empty()
			|| !field_errors_signal.get().is_empty()
	});

	let username_blur_handler = move |_event: WebEvent| username_touched_signal.set(true);
	let email_blur_handler = move |_event: WebEvent| email_touched_signal.set(true);
	let password_blur_handler = move |_event: WebEvent| password_touched_signal.set(true);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		// An attempted submission surfaces any remaining field messages.
		username_touched_signal.set(true);
		email_touched_signal.set(true);
		password_touched_signal.set(true);

		if *submission_pending_signal.get() {
			return;
		}

		let new_user = NewUser {
			username: (*username_signal.get()).clone(),
			email: (*email_signal.get()).clone(),
			password: (*password_signal.get()).clone(),
		};
		if new_user.username.is_empty() || new_user.email.is_empty() || new_user.password.is_empty() {
			return;
		}
		if !validate_new_user(&new_user).is_empty() {
			return;
		}

		submission_pending_signal.set(true);

		spawn_local_scoped(ctx, async move {
			let api: &Rc<dyn RegistrationApi> = use_context(ctx);
			let response = api.register_user(&new_user).await;
			submission_pending_signal.set(false);

			let session: &SessionSignals = use_context(ctx);
			match response {
				Ok(RegistrationResponse::Success(user_data)) => {
					log::debug!("Registered account {}", user_data.username);
					session.notification.set(Some(Notification::success(SIGNUP_SUCCESS_MESSAGE)));
					session.user.set(Some(user_data));
					navigate("/");
				}
				Ok(RegistrationResponse::Rejected(rejection)) => {
					let rejected_fields = serde_json::to_string(&rejection.errors).unwrap_or_default();
					log::debug!("Registration rejected by the server: {}", rejected_fields);
					session.notification.set(Some(Notification::error(SIGNUP_FAILURE_MESSAGE)));
				}
				Err(error) => {
					session
						.notification
						.set(Some(Notification::error_with_details(SIGNUP_FAILURE_MESSAGE, error)));
				}
			}
		});
	};

	view! {
		ctx,
		h1 { "Sign Up" }
		form(id="sign_up", novalidate=true, on:submit=form_submission_handler) {
			div(class="input_with_message") {
				label(for="sign_up_username") { "User Name" }
				input(
					id="sign_up_username",
					type="text",
					class=*username_class_signal.get(),
					bind:value=username_signal,
					on:blur=username_blur_handler
				)
				(if let Some(message) = *username_error_signal.get() {
					view! {
						ctx,
						span(id="sign_up_username_error", class="input_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			div(class="input_with_message") {
				label(for="sign_up_email") { "Email Address" }
				input(
					id="sign_up_email",
					type="email",
					class=*email_class_signal.get(),
					bind:value=email_signal,
					on:blur=email_blur_handler
				)
				(if let Some(message) = *email_error_signal.get() {
					view! {
						ctx,
						span(id="sign_up_email_error", class="input_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			div(class="input_with_message") {
				label(for="sign_up_password") { "Password" }
				input(
					id="sign_up_password",
					type="password",
					class=*password_class_signal.get(),
					bind:value=password_signal,
					on:blur=password_blur_handler
				)
				(if let Some(message) = *password_error_signal.get() {
					view! {
						ctx,
						span(id="sign_up_password_error", class="input_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			button(id="sign_up_button", type="submit", disabled=*submit_disabled_signal.get()) {
				"Sign Up"
			}
		}
	}
}
