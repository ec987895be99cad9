// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use conduit_signup_shared::messages::user::UserData;
use std::fmt::Display;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Whether a notification reports a completed action or a failed one
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum NotificationLevel {
	Success,
	Error,
}

/// A single page-level status banner
#[derive(Clone, Eq, PartialEq)]
pub struct Notification {
	message: &'static str,
	level: NotificationLevel,
	details: Option<String>,
}

impl Notification {
	/// Creates a new success notification
	pub fn success(message: &'static str) -> Self {
		Self {
			message,
			level: NotificationLevel::Success,
			details: None,
		}
	}

	/// Creates a new error notification with no details to render
	pub fn error(message: &'static str) -> Self {
		Self {
			message,
			level: NotificationLevel::Error,
			details: None,
		}
	}

	/// Creates a new error notification carrying the details of the failure
	/// that caused it
	pub fn error_with_details(message: &'static str, error: impl Display) -> Self {
		let details = Some(format!("{error}"));
		Self {
			message,
			level: NotificationLevel::Error,
			details,
		}
	}

	pub fn to_view<'a, G: Html>(&self, ctx: Scope<'a>, dismiss_handler: impl Fn(WebEvent) + 'a) -> View<G> {
		let message = self.message;
		let details = self.details.clone();
		let level_class = match self.level {
			NotificationLevel::Success => "page_notification_success",
			NotificationLevel::Error => "page_notification_error",
		};

		view! {
			ctx,
			div(class=format!("page_notification {}", level_class)) {
				span(class="page_notification_text") { (message) }
				(if let Some(details) = details.clone() {
					view! {
						ctx,
						span(class="page_notification_details") { (details) }
					}
				} else {
					view! { ctx, }
				})
				span(class="page_notification_dismiss") {
					a(class="click", on:click=dismiss_handler) { "[X]" }
				}
			}
		}
	}
}

/// Signals shared by all pages for the lifetime of the app: the account
/// created this session (if any) and the active status banner.
#[derive(Clone)]
pub struct SessionSignals {
	pub user: RcSignal<Option<UserData>>,
	pub notification: RcSignal<Option<Notification>>,
}

impl SessionSignals {
	pub fn new() -> Self {
		Self {
			user: create_rc_signal(None),
			notification: create_rc_signal(None),
		}
	}
}
