//! Application error types
//!
//! Unified error taxonomy for the authentication flows. Every variant except
//! `Internal` and `Config` carries a message that is safe to show to clients.

use pha_core::DomainError;
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Credential errors
    #[error("Duplicate phone number")]
    DuplicatePhoneNumber,

    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    // Token errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Session errors
    #[error("Session not found")]
    SessionNotFound,

    #[error("Blocked session")]
    BlockedSession,

    #[error("Incorrect session user")]
    IncorrectSessionUser,

    #[error("Mismatched session token")]
    MismatchedSessionToken,

    #[error("Expired session")]
    ExpiredSession,

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) | Self::DuplicatePhoneNumber | Self::WrongPassword => 400,

            // 401 Unauthorized
            Self::InvalidToken
            | Self::TokenExpired
            | Self::BlockedSession
            | Self::IncorrectSessionUser
            | Self::MismatchedSessionToken
            | Self::ExpiredSession => 401,

            // 404 Not Found
            Self::UserNotFound | Self::SessionNotFound => 404,

            // 500 Internal Server Error
            Self::Internal(_) | Self::Config(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicatePhoneNumber => "DUPLICATE_PHONE_NUMBER",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::BlockedSession => "BLOCKED_SESSION",
            Self::IncorrectSessionUser => "INCORRECT_SESSION_USER",
            Self::MismatchedSessionToken => "MISMATCHED_SESSION_TOKEN",
            Self::ExpiredSession => "EXPIRED_SESSION",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Check if this is a token verification failure
    #[must_use]
    pub fn is_token_error(&self) -> bool {
        matches!(self, Self::InvalidToken | Self::TokenExpired)
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound => Self::UserNotFound,
            DomainError::SessionNotFound(_) => Self::SessionNotFound,
            other => Self::Internal(other.into()),
        }
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
