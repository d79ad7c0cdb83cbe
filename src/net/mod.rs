//! Boundary to credential verification.

pub mod auth_provider;
