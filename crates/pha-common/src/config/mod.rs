//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, SessionConfig, MAX_TOKEN_EXPIRY_SECS, MIN_JWT_SECRET_LENGTH,
};
