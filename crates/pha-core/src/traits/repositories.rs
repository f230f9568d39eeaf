//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{NewSession, Session, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// A duplicate phone number is reported as a unique
    /// `ConstraintViolation` on `phone_number`.
    async fn create(&self, phone_number: &str, password_hash: &str) -> RepoResult<User>;

    /// Find user by phone number
    async fn find_by_phone_number(&self, phone_number: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session
    async fn create(&self, session: &NewSession) -> RepoResult<Session>;

    /// Find session by its refresh token id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Session>>;

    /// Mark a session as blocked
    async fn block(&self, id: Uuid) -> RepoResult<()>;

    /// Delete sessions that expired before the given instant
    async fn delete_expired(&self, before: DateTime<Utc>) -> RepoResult<u64>;
}
