//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a `010XXXXXXXX` phone number unlikely to collide across runs
pub fn unique_phone_number() -> String {
    let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = chrono::Utc::now().timestamp_subsec_nanos();
    format!("010{:08}", (nanos / 10 + seq) % 100_000_000)
}

/// Registration and login request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub phone_number: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            phone_number: unique_phone_number(),
            password: "TestPass123!".to_string(),
        }
    }

    pub fn with_password(&self, password: &str) -> Self {
        Self {
            phone_number: self.phone_number.clone(),
            password: password.to_string(),
        }
    }
}

/// Body of renewal and logout requests
#[derive(Debug, Serialize)]
pub struct RefreshTokenBody {
    pub refresh_token: String,
}

impl RefreshTokenBody {
    pub fn new(refresh_token: &str) -> Self {
        Self {
            refresh_token: refresh_token.to_string(),
        }
    }
}

/// Login and renewal response
#[derive(Debug, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
