//! # pha-common
//!
//! Shared utilities including configuration, error handling, password
//! hashing, token signing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    check_password, hash_password, verify_password, JwtService, TokenKind, TokenPayload,
    MAX_PASSWORD_LENGTH, TOKEN_ALGORITHM,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, SessionConfig, MAX_TOKEN_EXPIRY_SECS, MIN_JWT_SECRET_LENGTH,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
