//! Axum extractors for request handling
//!
//! Custom extractors for authentication, client metadata, and validation.

mod auth;
mod client;
mod validated;

pub use auth::AuthUser;
pub use client::Client;
pub use validated::ValidatedJson;
