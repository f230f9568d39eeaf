//! In-memory repository implementations
//!
//! Used by service and API tests, and handy for running the service without
//! PostgreSQL. They enforce the same constraints as the SQL schema: phone
//! numbers are unique and sessions must reference an existing user.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use pha_core::entities::{NewSession, Session, User};
use pha_core::error::{ConstraintViolation, DomainError};
use pha_core::traits::{RepoResult, SessionRepository, UserRepository};
use pha_core::value_objects::UserId;

#[derive(Debug, Default)]
struct UserTable {
    next_id: i64,
    rows: Vec<User>,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    table: Arc<Mutex<UserTable>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a user id exists
    pub fn contains(&self, id: UserId) -> bool {
        self.table.lock().rows.iter().any(|user| user.id == id)
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.table.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, phone_number: &str, password_hash: &str) -> RepoResult<User> {
        let mut table = self.table.lock();

        if table.rows.iter().any(|user| user.phone_number == phone_number) {
            return Err(ConstraintViolation::unique("phone_number").into());
        }

        table.next_id += 1;
        let user = User::new(
            UserId::new(table.next_id),
            phone_number.to_string(),
            password_hash.to_string(),
        );
        table.rows.push(user.clone());

        Ok(user)
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> RepoResult<Option<User>> {
        Ok(self
            .table
            .lock()
            .rows
            .iter()
            .find(|user| user.phone_number == phone_number)
            .cloned())
    }
}

/// In-memory implementation of SessionRepository
#[derive(Debug, Clone)]
pub struct MemorySessionRepository {
    users: MemoryUserRepository,
    rows: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl MemorySessionRepository {
    /// Create a session store whose foreign key points at `users`
    pub fn new(users: MemoryUserRepository) -> Self {
        Self {
            users,
            rows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Snapshot of a stored session
    pub fn get(&self, id: Uuid) -> Option<Session> {
        self.rows.lock().get(&id).cloned()
    }

    /// Overwrite a stored session in place
    pub fn put(&self, session: Session) {
        self.rows.lock().insert(session.id, session);
    }

    /// Number of stored sessions
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn create(&self, session: &NewSession) -> RepoResult<Session> {
        if !self.users.contains(session.user_id) {
            return Err(ConstraintViolation::foreign_key("user_id").into());
        }

        let mut rows = self.rows.lock();
        if rows.contains_key(&session.id) {
            return Err(ConstraintViolation::unique("id").into());
        }

        let stored = session.clone().into_session(Utc::now());
        rows.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Session>> {
        Ok(self.get(id))
    }

    async fn block(&self, id: Uuid) -> RepoResult<()> {
        match self.rows.lock().get_mut(&id) {
            Some(session) => {
                session.is_blocked = true;
                Ok(())
            }
            None => Err(DomainError::SessionNotFound(id)),
        }
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> RepoResult<u64> {
        let mut rows = self.rows.lock();
        let count = rows.len();
        rows.retain(|_, session| session.expired_at >= before);

        Ok((count - rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_session(user_id: UserId, expired_at: DateTime<Utc>) -> NewSession {
        NewSession {
            id: Uuid::new_v4(),
            user_id,
            refresh_token: "refresh".to_string(),
            user_agent: "test-agent".to_string(),
            client_ip: "127.0.0.1".to_string(),
            is_blocked: false,
            expired_at,
        }
    }

    #[tokio::test]
    async fn test_user_create_assigns_ids() {
        let repo = MemoryUserRepository::new();

        let first = repo.create("01011112222", "hash").await.unwrap();
        let second = repo.create("01033334444", "hash").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len(), 2);

        let found = repo.find_by_phone_number("01033334444").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(second.id));
        assert!(repo.find_by_phone_number("01099999999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_phone_number_is_unique_violation() {
        let repo = MemoryUserRepository::new();
        repo.create("01011112222", "hash").await.unwrap();

        let err = repo.create("01011112222", "other").await.unwrap_err();
        let violation = err.constraint_violation().unwrap();
        assert!(violation.is_unique_on("phone_number"));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_session_requires_existing_user() {
        let users = MemoryUserRepository::new();
        let sessions = MemorySessionRepository::new(users);

        let err = sessions
            .create(&new_session(UserId::new(99), Utc::now()))
            .await
            .unwrap_err();

        assert_eq!(
            err.constraint_violation(),
            Some(&ConstraintViolation::foreign_key("user_id"))
        );
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn test_session_create_find_block() {
        let users = MemoryUserRepository::new();
        let user = users.create("01011112222", "hash").await.unwrap();
        let sessions = MemorySessionRepository::new(users);

        let created = sessions
            .create(&new_session(user.id, Utc::now() + Duration::hours(1)))
            .await
            .unwrap();
        assert!(!created.is_blocked);

        sessions.block(created.id).await.unwrap();
        let found = sessions.find_by_id(created.id).await.unwrap().unwrap();
        assert!(found.is_blocked);

        let missing = Uuid::new_v4();
        assert!(matches!(
            sessions.block(missing).await,
            Err(DomainError::SessionNotFound(id)) if id == missing
        ));
    }

    #[tokio::test]
    async fn test_delete_expired_keeps_live_sessions() {
        let users = MemoryUserRepository::new();
        let user = users.create("01011112222", "hash").await.unwrap();
        let sessions = MemorySessionRepository::new(users);
        let now = Utc::now();

        let expired = sessions
            .create(&new_session(user.id, now - Duration::minutes(1)))
            .await
            .unwrap();
        let live = sessions
            .create(&new_session(user.id, now + Duration::minutes(1)))
            .await
            .unwrap();

        assert_eq!(sessions.delete_expired(now).await.unwrap(), 1);
        assert!(sessions.get(expired.id).is_none());
        assert!(sessions.get(live.id).is_some());
    }
}
