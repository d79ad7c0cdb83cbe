//! Routed pages.

pub mod dashboard;
pub mod help;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod register;
pub mod settings;
