//! # pha-service
//!
//! Application layer containing the authentication flows, their service
//! context, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    TokenDurations,
};
