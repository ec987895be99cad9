// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::session::SessionSignals;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Renders the active page-level notification, if any, with a control to
/// dismiss it. Lives above the routed page so a banner raised just before a
/// navigation stays visible on the destination page.
#[component]
pub fn NotificationDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let session: &SessionSignals = use_context(ctx);
	let notification = create_memo(ctx, {
		let notification = session.notification.clone();
		move || (*notification.get()).clone()
	});

	view! {
		ctx,
		div(id="page_notifications") {
			(if let Some(notification_data) = (*notification.get()).clone() {
				let dismiss_handler = move |_event: WebEvent| {
					let session: &SessionSignals = use_context(ctx);
					session.notification.set(None);
				};
				notification_data.to_view(ctx, dismiss_handler)
			} else {
				view! { ctx, }
			})
		}
	}
}
