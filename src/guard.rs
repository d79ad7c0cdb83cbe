//! Route guard gating pages on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped in `RouteGuard`. The decision itself is the
//! pure `decide` function; the component only renders its outcome and runs
//! redirects from an effect.
//!
//! While the session is loading the guard shows a placeholder and never
//! navigates, so a reload does not flash the login page before hydration.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{self, Redirect, RouteKind};
use crate::state::session::GuardState;
use crate::state::session_handle::SessionHandle;

/// What the guard should do for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show a neutral placeholder and wait.
    Placeholder,
    /// Show the wrapped page.
    Render,
    Redirect(Redirect),
}

/// Decide how to handle `path` (with query string `search`) in `state`.
#[must_use]
pub fn decide(state: GuardState, path: &str, search: &str) -> GuardDecision {
    match (routes::classify(path), state) {
        (RouteKind::Protected, GuardState::Loading) => GuardDecision::Placeholder,
        (RouteKind::Protected, GuardState::Unauthenticated) => {
            GuardDecision::Redirect(Redirect::replace(routes::login_with_return(&requested_location(path, search))))
        }
        (RouteKind::PublicOnly, GuardState::Authenticated) => {
            let from = routes::from_query(search);
            GuardDecision::Redirect(Redirect::replace(routes::return_target(from.as_deref())))
        }
        _ => GuardDecision::Render,
    }
}

fn requested_location(path: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{search}")
    }
}

/// Wraps a routed page and applies `decide` reactively.
#[component]
pub fn RouteGuard(session: SessionHandle, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        decide(session.get().guard_state(), &location.pathname.get(), &location.search.get())
    });

    Effect::new(move |_| {
        if let GuardDecision::Redirect(redirect) = decision.get() {
            log::debug!("guard redirect to {}", redirect.to);
            navigate(&redirect.to, NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Placeholder => view! {
            <div class="guard-placeholder" aria-busy="true">
                <div class="guard-placeholder__spinner"></div>
            </div>
        }
        .into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
