//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{self, Redirect};
use crate::state::session_handle::SessionHandle;

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to go once a sign-in succeeds: the remembered location when one was
/// carried in, else wherever the session provider pointed.
pub(crate) fn post_login_target(from: Option<&str>, redirect: Redirect) -> Redirect {
    match from {
        Some(from) => Redirect { to: routes::return_target(Some(from)), replace: redirect.replace },
        None => redirect,
    }
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace))
}

#[component]
pub fn LoginPage(session: SessionHandle) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let search = use_location().search;
    let navigate = use_navigate();

    let busy = move || session.get().is_loading();
    let register_href = move || routes::with_return(routes::REGISTER, routes::from_query(&search.get()).as_deref());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());
        let from = routes::from_query(&search.get_untracked());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(email_value, password_value).await {
                    Ok(redirect) => {
                        let target = post_login_target(from.as_deref(), redirect);
                        navigate(&target.to, NavigateOptions { replace: target.replace, ..NavigateOptions::default() });
                    }
                    // Failures reach the user as an error toast.
                    Err(e) => log::debug!("login did not complete: {e}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, from, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your dashboard"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=register_href>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
