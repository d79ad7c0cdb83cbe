//! Authentication session model for the current browser profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and identity-aware components. Owned and mutated
//! only by `SessionProvider`.
//!
//! DESIGN
//! ======
//! Authentication is derived from `user.is_some()` rather than stored as a
//! separate flag, so a session can never claim to be authenticated without a
//! user or carry a user while signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, as mirrored into durable storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into(), name: None }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name to show in the header: the display name when set, else the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Snapshot of the authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    loading: bool,
}

impl Session {
    /// Pre-hydration session: unauthenticated and loading.
    #[must_use]
    pub fn starting() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { user: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn guard_state(&self) -> GuardState {
        if self.loading {
            GuardState::Loading
        } else if self.is_authenticated() {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::starting()
    }
}

/// Route-guard view of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authenticated,
    Unauthenticated,
}
