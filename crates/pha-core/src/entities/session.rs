//! Session entity - server-side record of an issued refresh token
//!
//! A session row is keyed by the refresh token's own token id. Renewal
//! trusts a refresh token only while its session is unblocked, owned by the
//! token subject, stores the exact token string, and has not expired.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::UserId;

/// Persisted refresh-token session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Token id embedded in the refresh token
    pub id: Uuid,
    pub user_id: UserId,
    /// The full signed refresh token as issued
    pub refresh_token: String,
    pub user_agent: String,
    pub client_ip: String,
    pub is_blocked: bool,
    pub expired_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has expired at the given instant
    ///
    /// The session is considered expired from `expired_at` onwards.
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expired_at
    }

    /// Check whether the session has expired now
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Check whether the session belongs to the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Values needed to persist a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub id: Uuid,
    pub user_id: UserId,
    pub refresh_token: String,
    pub user_agent: String,
    pub client_ip: String,
    pub is_blocked: bool,
    pub expired_at: DateTime<Utc>,
}

impl NewSession {
    /// Turn the insert values into a stored session with the given creation time
    pub fn into_session(self, created_at: DateTime<Utc>) -> Session {
        Session {
            id: self.id,
            user_id: self.user_id,
            refresh_token: self.refresh_token,
            user_agent: self.user_agent,
            client_ip: self.client_ip,
            is_blocked: self.is_blocked,
            expired_at: self.expired_at,
            created_at,
        }
    }
}
