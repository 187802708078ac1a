//! User and session records owned by the credential store

use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Stored user record
///
/// Never serialized directly: responses use [`PublicUser`] so the hash and
/// one-time codes cannot leak.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub picture: Option<String>,
    pub is_admin: bool,
    pub is_verified: bool,
    pub verification_code: Option<String>,
    pub verification_code_expires: Option<OffsetDateTime>,
    pub reset_code: Option<String>,
    pub reset_code_expires: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
            is_verified: self.is_verified,
        }
    }
}

/// Fields supplied when creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub picture: Option<String>,
    pub is_admin: bool,
    pub is_verified: bool,
    pub verification_code: Option<String>,
    pub verification_code_expires: Option<OffsetDateTime>,
}

/// Client-facing view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub is_verified: bool,
}

/// Server-side session for the opaque-token strategy
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub session_token: String,
    pub user_id: Uuid,
    pub expires_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

impl Session {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }
}
