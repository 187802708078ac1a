//! Credential store: persistence seam for users and opaque sessions
//!
//! All lookups by username or email are case-insensitive. Uniqueness is the
//! store's responsibility: an insert that collides reports
//! [`StoreError::UniqueViolation`] even when the caller's pre-check passed.

mod memory;
mod postgres;

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::models::{NewUser, Session, User};
use super::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated on {0:?}")]
    UniqueViolation(UniqueField),
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db) = err.as_database_error() {
            if db.is_unique_violation() {
                let field = match db.constraint() {
                    Some(name) if name.contains("email") => UniqueField::Email,
                    _ => UniqueField::Username,
                };
                return StoreError::UniqueViolation(field);
            }
        }
        StoreError::Backend(err.to_string())
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(UniqueField::Username) => AuthError::DuplicateUsername,
            StoreError::UniqueViolation(UniqueField::Email) => AuthError::DuplicateEmail,
            StoreError::Backend(detail) => AuthError::Internal(detail),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Match `identifier` against username OR email
    async fn find_user_by_login(&self, identifier: &str) -> StoreResult<Option<User>>;

    async fn username_exists(&self, username: &str) -> StoreResult<bool>;

    async fn email_exists(&self, email: &str) -> StoreResult<bool>;

    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    /// Set `is_verified` and clear the verification code and its expiry
    /// in one update. With `expected_code`, the stored code must still
    /// equal it. Returns false if no unverified user matched.
    async fn mark_verified(
        &self,
        user_id: Uuid,
        expected_code: Option<&str>,
    ) -> StoreResult<bool>;

    async fn set_verification_code(
        &self,
        user_id: Uuid,
        code: &str,
        expires_at: OffsetDateTime,
    ) -> StoreResult<()>;

    async fn set_reset_code(
        &self,
        user_id: Uuid,
        code: &str,
        expires_at: OffsetDateTime,
    ) -> StoreResult<()>;

    /// Replace the password hash and clear the reset code in one update,
    /// only while the stored reset code still equals `expected_code`
    async fn update_password(
        &self,
        user_id: Uuid,
        expected_code: &str,
        password_hash: &str,
    ) -> StoreResult<bool>;

    async fn insert_session(&self, session: &Session) -> StoreResult<()>;

    async fn find_session(&self, token: &str) -> StoreResult<Option<Session>>;

    /// Returns true if a session was removed
    async fn delete_session(&self, token: &str) -> StoreResult<bool>;

    async fn delete_expired_sessions(&self) -> StoreResult<u64>;
}
