//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::components::toast_host::ToastHost;
use crate::guard::RouteGuard;
use crate::pages::{
    dashboard::DashboardPage, help::HelpPage, landing::LandingPage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage, settings::SettingsPage,
};
use crate::routes::DashboardSection;
use crate::state::session_handle::{SessionHandle, ToastHandle};

/// Root application component.
///
/// Owns the one session for this browser tab. Hydration runs here,
/// synchronously, before the router renders anything.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let toasts = ToastHandle::new(&config);
    let session = SessionHandle::install(&config, toasts);

    view! {
        <Title text="Pulseboard"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("")
                    view=move || view! { <RouteGuard session=session><LandingPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("login")
                    view=move || view! { <RouteGuard session=session><LoginPage session=session/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("register")
                    view=move || view! { <RouteGuard session=session><RegisterPage session=session/></RouteGuard> }
                />

                // Protected routes
                <Route
                    path=StaticSegment("dashboard")
                    view=move || dashboard(session, DashboardSection::Overview)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("overview"))
                    view=move || dashboard(session, DashboardSection::Overview)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("weather"))
                    view=move || dashboard(session, DashboardSection::Weather)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("news"))
                    view=move || dashboard(session, DashboardSection::News)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("finance"))
                    view=move || dashboard(session, DashboardSection::Finance)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("settings"))
                    view=move || view! { <RouteGuard session=session><SettingsPage session=session/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("help"))
                    view=move || view! { <RouteGuard session=session><HelpPage session=session/></RouteGuard> }
                />
            </Routes>
        </Router>

        <ToastHost toasts=toasts/>
    }
}

fn dashboard(session: SessionHandle, section: DashboardSection) -> impl IntoView {
    view! {
        <RouteGuard session=session>
            <DashboardPage session=session section=section/>
        </RouteGuard>
    }
}
