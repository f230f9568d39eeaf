//! Business logic services
//!
//! Service layer implementations that orchestrate the credential store, the
//! session store, and the token service.

pub mod auth;
pub mod context;
pub mod error;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder, TokenDurations};
pub use error::{ServiceError, ServiceResult};
