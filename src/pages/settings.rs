//! Account settings page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::routes;
use crate::state::session_handle::SessionHandle;

#[component]
pub fn SettingsPage(session: SessionHandle) -> impl IntoView {
    let name = move || {
        session
            .get()
            .user()
            .and_then(|u| u.name.clone())
            .unwrap_or_else(|| "Not set".to_owned())
    };
    let email = move || session.get().user().map(|u| u.email.clone()).unwrap_or_default();

    view! {
        <DashboardLayout session=session active=routes::SETTINGS>
            <header class="dashboard-page__header">
                <h1>"Settings"</h1>
            </header>
            <section class="settings-card">
                <h2>"Account"</h2>
                <dl class="settings-card__fields">
                    <dt>"Name"</dt>
                    <dd>{name}</dd>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                </dl>
            </section>
        </DashboardLayout>
    }
}
