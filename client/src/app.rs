// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::RegistrationApi;
use crate::components::notification_display::NotificationDisplay;
use crate::pages::home::HomeView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::SignUpView;
use crate::session::SessionSignals;
use std::rc::Rc;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
pub enum AppRoute {
	#[to("/")]
	Home,
	#[to("/register")]
	Register,
	#[not_found]
	NotFound,
}

#[derive(Prop)]
pub struct AppProps {
	pub api: Rc<dyn RegistrationApi>,
}

/// Top-level application component. Owns the context values every page reads
/// (the registration API and the session signals) and routes to the active
/// page, with the notification banner rendered above it.
#[component]
pub fn App<G: Html>(ctx: Scope<'_>, props: AppProps) -> View<G> {
	provide_context(ctx, props.api);
	provide_context(ctx, SessionSignals::new());

	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoute>| {
				view! {
					ctx,
					div(id="app") {
						NotificationDisplay()
						(match route.get().as_ref() {
							AppRoute::Home => view! { ctx, HomeView() },
							AppRoute::Register => view! { ctx, SignUpView() },
							AppRoute::NotFound => view! { ctx, NotFoundView() },
						})
					}
				}
			}
		)
	}
}
