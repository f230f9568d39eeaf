//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use std::fmt;

use pha_common::MAX_PASSWORD_LENGTH;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Length of a mobile phone number (`010` + 8 digits)
pub const PHONE_NUMBER_LENGTH: usize = 11;

const PHONE_NUMBER_PREFIX: &str = "010";

// Password `length` bounds below must match this constant
const _: () = assert!(MAX_PASSWORD_LENGTH == 72);

/// Check a mobile phone number of the form `010XXXXXXXX`
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == PHONE_NUMBER_LENGTH
        && value.starts_with(PHONE_NUMBER_PREFIX)
        && value.bytes().all(|b| b.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("phone_number")
            .with_message("Phone number must be 010 followed by 8 digits".into()))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 72, message = "Password must be 1-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 72, message = "Password must be 1-72 characters"))]
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("phone_number", &self.phone_number)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("phone_number", &self.phone_number)
            .finish_non_exhaustive()
    }
}

/// Access token renewal request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenewAccessTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Logout request naming the session's refresh token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}
