//! # pha-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewSession, Session, User};
pub use error::{ConstraintKind, ConstraintViolation, DomainError};
pub use traits::{RepoResult, SessionRepository, UserRepository};
pub use value_objects::{UserId, UserIdParseError};
