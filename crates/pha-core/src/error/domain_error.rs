//! Domain errors - error types for the domain layer

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Kind of storage constraint that rejected a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique => f.write_str("unique"),
            Self::ForeignKey => f.write_str("foreign key"),
        }
    }
}

/// Structured constraint violation reported by a repository
///
/// Repositories translate driver-specific error codes into this shape so that
/// services only ever match on `kind` and `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub kind: ConstraintKind,
    pub field: String,
}

impl ConstraintViolation {
    pub fn unique(field: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::Unique,
            field: field.into(),
        }
    }

    pub fn foreign_key(field: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::ForeignKey,
            field: field.into(),
        }
    }

    /// Check for a uniqueness violation on the given field
    pub fn is_unique_on(&self, field: &str) -> bool {
        self.kind == ConstraintKind::Unique && self.field == field
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} constraint violated on {}", self.kind, self.field)
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound,

    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    // =========================================================================
    // Storage Constraint Errors
    // =========================================================================
    #[error("{0}")]
    ConstraintViolation(ConstraintViolation),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::SessionNotFound(_) => "SESSION_NOT_FOUND",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound | Self::SessionNotFound(_))
    }

    /// Get the constraint violation carried by this error, if any
    pub fn constraint_violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::ConstraintViolation(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<ConstraintViolation> for DomainError {
    fn from(violation: ConstraintViolation) -> Self {
        Self::ConstraintViolation(violation)
    }
}
