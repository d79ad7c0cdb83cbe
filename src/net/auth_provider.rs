//! Credential verification behind a pluggable interface.
//!
//! The dashboard ships with `SimulatedAuthProvider`, which accepts every
//! request after a fixed delay. A real backend slots in by implementing
//! `AuthProvider`; neither the session provider nor the route guard change.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::AuthError;
use crate::state::session::User;

/// Input to a credential check.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
}

impl Credentials {
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Login { email, .. } | Self::Register { email, .. } => email,
        }
    }
}

// Keep passwords out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login { email, .. } => f.debug_struct("Login").field("email", email).finish_non_exhaustive(),
            Self::Register { name, email, .. } => f
                .debug_struct("Register")
                .field("name", name)
                .field("email", email)
                .finish_non_exhaustive(),
        }
    }
}

/// Verifies credentials and returns the identity they belong to.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` for bad credentials or
    /// `AuthError::Network` when the check could not be performed.
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError>;
}

/// Always-succeeding provider that simulates network latency.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedAuthProvider {
    latency: Duration,
}

impl SimulatedAuthProvider {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait(?Send)]
impl AuthProvider for SimulatedAuthProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        sleep(self.latency).await;
        let user = match credentials {
            Credentials::Login { email, .. } => User::new(email.clone()),
            Credentials::Register { name, email, .. } => User::new(email.clone()).with_name(name.clone()),
        };
        Ok(user)
    }
}

async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = duration;
    }
}
