//! Top bar with the signed-in identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::session_handle::SessionHandle;

/// Up to two uppercase initials for the avatar badge.
pub(crate) fn initials(display_name: &str) -> String {
    let source = display_name.split('@').next().unwrap_or(display_name);
    source
        .split(|c: char| c.is_whitespace() || c == '.' || c == '_' || c == '-')
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn DashboardHeader(session: SessionHandle) -> impl IntoView {
    let navigate = use_navigate();

    let display_name = move || {
        session
            .get()
            .user()
            .map(|u| u.display_name().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let redirect = session.logout();
        navigate(&redirect.to, NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() });
    };

    view! {
        <header class="dashboard-header">
            <a href=routes::DASHBOARD class="dashboard-header__brand">"Pulseboard"</a>
            <div class="dashboard-header__user">
                <span class="dashboard-header__avatar">{move || initials(&display_name())}</span>
                <span class="dashboard-header__name">{display_name}</span>
                <button class="btn dashboard-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials("Ada Lovelace"), "AL");
    }

    #[test]
    fn initials_from_email_local_part() {
        assert_eq!(initials("grace.hopper@navy.mil"), "GH");
        assert_eq!(initials("a@b.com"), "A");
    }

    #[test]
    fn initials_cap_at_two() {
        assert_eq!(initials("john ronald reuel tolkien"), "JR");
    }

    #[test]
    fn initials_empty_name() {
        assert_eq!(initials(""), "");
    }
}
