//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use pha_common::AppError;
use pha_core::DomainError;
use std::fmt;
use tracing::error;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Application error carrying its own status (auth, session, credentials)
    App(AppError),

    /// Client input that failed a check, reported as 400 with the inner reason
    BadRequest(AppError),

    /// Validation error
    Validation(String),

    /// Internal error; the cause is logged, never shown
    Internal(anyhow::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App(e) | Self::BadRequest(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Internal(_) => f.write_str("Internal server error"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::App(e) | Self::BadRequest(e) => Some(e),
            Self::Internal(e) => Some(&**e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error, logging its cause
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        error!(error = %format!("{err:#}"), "Internal error");
        Self::Internal(err)
    }

    /// Check if this is an internal error
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Get the application error behind this error, if any
    pub fn app_error(&self) -> Option<&AppError> {
        match self {
            Self::App(e) | Self::BadRequest(e) => Some(e),
            _ => None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::App(e) => e.status_code(),
            Self::BadRequest(_) | Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) | Self::BadRequest(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound => Self::App(AppError::UserNotFound),
            DomainError::SessionNotFound(_) => Self::App(AppError::SessionNotFound),
            other => Self::internal(other),
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Internal(e) => Self::internal(e),
            AppError::Validation(msg) => Self::Validation(msg),
            other => Self::App(other),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::App(e) | ServiceError::BadRequest(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(e) => AppError::Internal(e),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
