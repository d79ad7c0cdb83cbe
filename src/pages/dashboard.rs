//! Dashboard page: overview plus the weather, news and finance sections.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::widget_panel::{WidgetKind, WidgetPanel};
use crate::routes::DashboardSection;
use crate::state::session_handle::SessionHandle;

/// Widgets shown for `section`. The overview shows all of them.
pub(crate) fn widgets_for(section: DashboardSection) -> &'static [WidgetKind] {
    match section {
        DashboardSection::Overview => &[WidgetKind::Weather, WidgetKind::News, WidgetKind::Finance],
        DashboardSection::Weather => &[WidgetKind::Weather],
        DashboardSection::News => &[WidgetKind::News],
        DashboardSection::Finance => &[WidgetKind::Finance],
    }
}

#[component]
pub fn DashboardPage(session: SessionHandle, section: DashboardSection) -> impl IntoView {
    let greeting = move || {
        session
            .get()
            .user()
            .map(|u| format!("Welcome back, {}", u.display_name()))
            .unwrap_or_default()
    };

    view! {
        <DashboardLayout session=session active=section.path()>
            <header class="dashboard-page__header">
                <h1>{section.title()}</h1>
                <p class="dashboard-page__greeting">{greeting}</p>
            </header>
            <div class="dashboard-page__grid">
                {widgets_for(section)
                    .iter()
                    .map(|&kind| view! { <WidgetPanel kind=kind/> })
                    .collect::<Vec<_>>()}
            </div>
        </DashboardLayout>
    }
}
