//! Public landing page.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Pulseboard"</h1>
            <p class="landing-page__tagline">"Weather, news and markets on one dashboard."</p>
            <div class="landing-page__actions">
                <a href=routes::LOGIN class="btn btn--primary">"Sign in"</a>
                <a href=routes::REGISTER class="btn">"Create account"</a>
            </div>
        </div>
    }
}
