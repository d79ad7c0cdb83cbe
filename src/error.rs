//! Error types shared by the session layer.
//!
//! ERROR HANDLING
//! ==============
//! Hydration faults never surface as errors: the store fails closed to an
//! unauthenticated session. Only credential operations return `AuthError`,
//! and the UI decides what to show for each variant.

/// Failure talking to durable key-value storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Failure of a `login` or `register` call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Another credential operation is still in flight.
    #[error("an authentication request is already in progress")]
    Busy,
    /// A logout happened while the request was pending; its result was dropped.
    #[error("authentication request was superseded by logout")]
    Superseded,
    #[error("credentials rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
