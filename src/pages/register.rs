//! Registration page: name, email and password.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::login::{looks_like_email, post_login_target};
use crate::routes;
use crate::state::session_handle::SessionHandle;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage(session: SessionHandle) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let search = use_location().search;
    let navigate = use_navigate();

    let busy = move || session.get().is_loading();
    let login_href = move || routes::with_return(routes::LOGIN, routes::from_query(&search.get()).as_deref());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let input = match validate_register_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
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
                match session.register(input.name, input.email, input.password).await {
                    Ok(redirect) => {
                        let target = post_login_target(from.as_deref(), redirect);
                        navigate(&target.to, NavigateOptions { replace: target.replace, ..NavigateOptions::default() });
                    }
                    Err(e) => log::debug!("registration did not complete: {e}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (input, from, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=login_href>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
