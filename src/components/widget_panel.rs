//! Placeholder panel for a dashboard widget.
//!
//! The weather, news and finance widgets fetch and draw their own data; the
//! dashboard only reserves their slot and mounts them behind the route guard.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Weather,
    News,
    Finance,
}

impl WidgetKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Weather => "Weather",
            Self::News => "Latest news",
            Self::Finance => "Markets",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Weather => "widget-panel--weather",
            Self::News => "widget-panel--news",
            Self::Finance => "widget-panel--finance",
        }
    }
}

#[component]
pub fn WidgetPanel(kind: WidgetKind) -> impl IntoView {
    view! {
        <section class=format!("widget-panel {}", kind.css_modifier())>
            <h2 class="widget-panel__title">{kind.title()}</h2>
            <div class="widget-panel__body" data-widget=kind.title()></div>
        </section>
    }
}
