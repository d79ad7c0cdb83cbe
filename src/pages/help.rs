//! Help page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::routes;
use crate::state::session_handle::SessionHandle;

#[component]
pub fn HelpPage(session: SessionHandle) -> impl IntoView {
    view! {
        <DashboardLayout session=session active=routes::HELP>
            <header class="dashboard-page__header">
                <h1>"Help"</h1>
            </header>
            <section class="help-card">
                <h2>"Getting around"</h2>
                <p>"Use the sidebar to switch between the overview and the weather, news and finance sections."</p>
                <p>"Your session is remembered on this browser until you log out."</p>
            </section>
        </DashboardLayout>
    }
}
