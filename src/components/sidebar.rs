//! Dashboard navigation.

use leptos::prelude::*;

use crate::routes::{self, DashboardSection};

/// Sidebar entries as `(label, path)`, in display order.
pub(crate) fn nav_items() -> Vec<(&'static str, &'static str)> {
    let mut items = vec![("Dashboard", routes::DASHBOARD)];
    items.extend(
        DashboardSection::ALL
            .iter()
            .filter(|s| **s != DashboardSection::Overview)
            .map(|s| (s.title(), s.path())),
    );
    items.push(("Settings", routes::SETTINGS));
    items.push(("Help", routes::HELP));
    items
}

/// `/dashboard` and `/dashboard/overview` are the same page.
pub(crate) fn is_active(item_path: &str, active: &str) -> bool {
    item_path == active
        || (item_path == routes::DASHBOARD && active == DashboardSection::Overview.path())
}

#[component]
pub fn Sidebar(active: &'static str) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {nav_items()
                    .into_iter()
                    .map(|(label, path)| {
                        let class = if is_active(path, active) {
                            "sidebar__item sidebar__item--active"
                        } else {
                            "sidebar__item"
                        };
                        view! {
                            <li class=class>
                                <a href=path>{label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
