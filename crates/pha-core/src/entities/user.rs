//! User entity - a registered account holder

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity identified by a unique phone number
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub phone_number: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the given stored hash
    pub fn new(id: UserId, phone_number: String, password_hash: String) -> Self {
        Self {
            id,
            phone_number,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("phone_number", &self.phone_number)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
