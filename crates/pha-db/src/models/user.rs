//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub phone_number: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
