//! Shared chrome for protected pages: header, sidebar and content area.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::sidebar::Sidebar;
use crate::state::session_handle::SessionHandle;

#[component]
pub fn DashboardLayout(session: SessionHandle, active: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-layout">
            <DashboardHeader session=session/>
            <div class="dashboard-layout__body">
                <Sidebar active=active/>
                <main class="dashboard-layout__main">{children()}</main>
            </div>
        </div>
    }
}
