//! Reusable UI components.

pub mod dashboard_header;
pub mod dashboard_layout;
pub mod sidebar;
pub mod toast_host;
pub mod widget_panel;
