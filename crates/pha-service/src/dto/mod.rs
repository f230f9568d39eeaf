//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Service parameters combining a request with client metadata
//! - Response DTOs for serializing API outputs

pub mod params;
pub mod requests;
pub mod responses;

pub use params::{ClientInfo, LoginParams, RenewAccessTokenParams};
pub use requests::{
    validate_phone_number, LoginRequest, LogoutRequest, RegisterRequest, RenewAccessTokenRequest,
};
pub use responses::{HealthChecks, HealthResponse, ReadinessResponse, TokenPairResponse};
