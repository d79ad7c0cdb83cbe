//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Plain data (`session`, `toast`) is separate from the objects that own and
//! mutate it (`session_store`, `session_provider`) and from the Leptos glue
//! (`session_handle`), so the session rules are testable without a browser.

pub mod session;
pub mod session_handle;
pub mod session_provider;
pub mod session_store;
pub mod toast;
