//! Route table and navigation targets.
//!
//! DESIGN
//! ======
//! Every path the router knows is classified here so the guard can decide
//! from a path alone. The return location for post-login navigation travels
//! in a `from` query parameter on the login URL.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const SETTINGS: &str = "/dashboard/settings";
pub const HELP: &str = "/dashboard/help";

const RETURN_PARAM: &str = "from";

/// Access rule for a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// Anyone may view.
    Public,
    /// Signed-out only; signed-in users are sent to the dashboard.
    PublicOnly,
    /// Signed-in only; signed-out users are sent to login.
    Protected,
}

/// Dashboard sections that share the dashboard page layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardSection {
    Overview,
    Weather,
    News,
    Finance,
}

impl DashboardSection {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Weather, Self::News, Self::Finance];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/dashboard/overview",
            Self::Weather => "/dashboard/weather",
            Self::News => "/dashboard/news",
            Self::Finance => "/dashboard/finance",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Weather => "Weather",
            Self::News => "News",
            Self::Finance => "Finance",
        }
    }
}

/// A navigation the caller should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

impl Redirect {
    #[must_use]
    pub fn push(to: impl Into<String>) -> Self {
        Self { to: to.into(), replace: false }
    }

    #[must_use]
    pub fn replace(to: impl Into<String>) -> Self {
        Self { to: to.into(), replace: true }
    }
}

/// Classify `path` (no query string). Trailing slashes are ignored.
#[must_use]
pub fn classify(path: &str) -> RouteKind {
    let path = normalize(path);
    match path {
        HOME | LOGIN | REGISTER => RouteKind::PublicOnly,
        DASHBOARD | SETTINGS | HELP => RouteKind::Protected,
        _ if DashboardSection::ALL.iter().any(|s| s.path() == path) => RouteKind::Protected,
        _ => RouteKind::Public,
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME } else { trimmed }
}

/// Login URL that remembers `requested` for the post-login return.
#[must_use]
pub fn login_with_return(requested: &str) -> String {
    with_return(LOGIN, Some(requested))
}

/// `page` with the return location appended, or `page` alone without one.
#[must_use]
pub fn with_return(page: &str, from: Option<&str>) -> String {
    match from {
        Some(from) if !from.is_empty() => format!("{page}?{RETURN_PARAM}={}", urlencoding::encode(from)),
        _ => page.to_owned(),
    }
}

/// Extract the decoded `from` parameter from a query string.
///
/// Accepts the query with or without its leading `?`.
#[must_use]
pub fn from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == RETURN_PARAM)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(std::borrow::Cow::into_owned)
        .filter(|value| !value.is_empty())
}

/// Where to land after signing in.
///
/// Only local protected locations are honored; anything else (external
/// URLs, protocol-relative paths, public pages) falls back to the dashboard.
#[must_use]
pub fn return_target(from: Option<&str>) -> String {
    let Some(from) = from else {
        return DASHBOARD.to_owned();
    };
    if !from.starts_with('/') || from.starts_with("//") || from.contains('\\') {
        return DASHBOARD.to_owned();
    }
    let path = from.split(['?', '#']).next().unwrap_or(from);
    if classify(path) == RouteKind::Protected {
        from.to_owned()
    } else {
        DASHBOARD.to_owned()
    }
}
