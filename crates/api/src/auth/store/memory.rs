//! In-process credential store for tests and local development
//!
//! Same contract as the Postgres store, including case-insensitive
//! uniqueness enforced atomically at insert time.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CredentialStore, StoreError, StoreResult, UniqueField};
use crate::auth::models::{NewUser, Session, User};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    sessions: HashMap<String, Session>,
}

#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn session_count(&self) -> usize {
        self.inner.read().await.sessions.len()
    }
}

fn same(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn user_mut(inner: &mut Inner, user_id: Uuid) -> StoreResult<&mut User> {
    inner
        .users
        .get_mut(&user_id)
        .ok_or_else(|| StoreError::Backend(format!("user {user_id} does not exist")))
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| same(&u.email, email)).cloned())
    }

    async fn find_user_by_login(&self, identifier: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        let by_username = inner.users.values().find(|u| same(&u.username, identifier));
        let found = by_username.or_else(|| inner.users.values().find(|u| same(&u.email, identifier)));
        Ok(found.cloned())
    }

    async fn username_exists(&self, username: &str) -> StoreResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().any(|u| same(&u.username, username)))
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().any(|u| same(&u.email, email)))
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| same(&u.username, &user.username)) {
            return Err(StoreError::UniqueViolation(UniqueField::Username));
        }
        if inner.users.values().any(|u| same(&u.email, &user.email)) {
            return Err(StoreError::UniqueViolation(UniqueField::Email));
        }

        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            display_name: user.display_name,
            picture: user.picture,
            is_admin: user.is_admin,
            is_verified: user.is_verified,
            verification_code: user.verification_code,
            verification_code_expires: user.verification_code_expires,
            reset_code: None,
            reset_code_expires: None,
            created_at: OffsetDateTime::now_utc(),
        };
        inner.users.insert(created.id, created.clone());

        Ok(created)
    }

    async fn mark_verified(
        &self,
        user_id: Uuid,
        expected_code: Option<&str>,
    ) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.users.get_mut(&user_id) {
            Some(user)
                if !user.is_verified
                    && expected_code
                        .is_none_or(|code| user.verification_code.as_deref() == Some(code)) =>
            {
                user.is_verified = true;
                user.verification_code = None;
                user.verification_code_expires = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn set_verification_code(
        &self,
        user_id: Uuid,
        code: &str,
        expires_at: OffsetDateTime,
    ) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let user = user_mut(&mut inner, user_id)?;
        user.verification_code = Some(code.to_string());
        user.verification_code_expires = Some(expires_at);
        Ok(())
    }

    async fn set_reset_code(
        &self,
        user_id: Uuid,
        code: &str,
        expires_at: OffsetDateTime,
    ) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let user = user_mut(&mut inner, user_id)?;
        user.reset_code = Some(code.to_string());
        user.reset_code_expires = Some(expires_at);
        Ok(())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        expected_code: &str,
        password_hash: &str,
    ) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let user = user_mut(&mut inner, user_id)?;
        if user.reset_code.as_deref() != Some(expected_code) {
            return Ok(false);
        }
        user.password_hash = password_hash.to_string();
        user.reset_code = None;
        user.reset_code_expires = None;
        Ok(true)
    }

    async fn insert_session(&self, session: &Session) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&session.user_id) {
            return Err(StoreError::Backend(format!(
                "session references unknown user {}",
                session.user_id
            )));
        }
        inner
            .sessions
            .insert(session.session_token.clone(), session.clone());
        Ok(())
    }

    async fn find_session(&self, token: &str) -> StoreResult<Option<Session>> {
        Ok(self.inner.read().await.sessions.get(token).cloned())
    }

    async fn delete_session(&self, token: &str) -> StoreResult<bool> {
        Ok(self.inner.write().await.sessions.remove(token).is_some())
    }

    async fn delete_expired_sessions(&self) -> StoreResult<u64> {
        let now = OffsetDateTime::now_utc();
        let mut inner = self.inner.write().await;
        let before = inner.sessions.len();
        inner.sessions.retain(|_, session| !session.is_expired(now));
        Ok((before - inner.sessions.len()) as u64)
    }
}
