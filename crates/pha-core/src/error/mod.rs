//! Domain error types

mod domain_error;

pub use domain_error::{ConstraintKind, ConstraintViolation, DomainError};
