//! # pha-api
//!
//! REST API server built with Axum framework. Exposes registration, login,
//! access token renewal and logout under `/api/v1/auth`, plus health probes.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server, spawn_session_purge};
pub use state::AppState;
