// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::session::SessionSignals;
use sycamore::prelude::*;

/// Landing page. Greets the account created this session when one exists and
/// points at the sign-up page when one doesn't.
#[component]
pub fn HomeView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let session: &SessionSignals = use_context(ctx);
	let user = create_memo(ctx, {
		let user = session.user.clone();
		move || (*user.get()).clone()
	});

	view! {
		ctx,
		div(id="home") {
			h1 { "Conduit" }
			(if let Some(user_data) = (*user.get()).clone() {
				view! {
					ctx,
					p(id="home_welcome") { (format!("Welcome, {}!", user_data.username)) }
				}
			} else {
				view! {
					ctx,
					p {
						a(href="/register") { "Need an account? Sign up here." }
					}
				}
			})
		}
	}
}
