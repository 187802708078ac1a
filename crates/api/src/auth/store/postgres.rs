//! Postgres-backed credential store

use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{CredentialStore, StoreResult};
use crate::auth::models::{NewUser, Session, User};

const USER_COLUMNS: &str = r#"
    id, username, email, password_hash, display_name, picture,
    is_admin, is_verified, verification_code, verification_code_expires,
    reset_code, reset_code_expires, created_at
"#;

#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_login(&self, identifier: &str) -> StoreResult<Option<User>> {
        // Usernames cannot contain '@', so at most one row matches each arm;
        // prefer the username match if both somehow exist.
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users
            WHERE LOWER(username) = LOWER($1) OR LOWER(email) = LOWER($1)
            ORDER BY (LOWER(username) = LOWER($1)) DESC
            LIMIT 1
            "#
        ))
        .bind(identifier.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn username_exists(&self, username: &str) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE LOWER(username) = LOWER($1))",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email.trim())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (
                id, username, email, password_hash, display_name, picture,
                is_admin, is_verified, verification_code, verification_code_expires,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(&user.picture)
        .bind(user.is_admin)
        .bind(user.is_verified)
        .bind(&user.verification_code)
        .bind(user.verification_code_expires)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn mark_verified(
        &self,
        user_id: Uuid,
        expected_code: Option<&str>,
    ) -> StoreResult<bool> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE users
            SET is_verified = TRUE,
                verification_code = NULL,
                verification_code_expires = NULL
            WHERE id = $1
              AND is_verified = FALSE
              AND ($2::TEXT IS NULL OR verification_code = $2)
            "#,
        )
        .bind(user_id)
        .bind(expected_code)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn set_verification_code(
        &self,
        user_id: Uuid,
        code: &str,
        expires_at: OffsetDateTime,
    ) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET verification_code = $2,
                verification_code_expires = $3
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(code)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_reset_code(
        &self,
        user_id: Uuid,
        code: &str,
        expires_at: OffsetDateTime,
    ) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET reset_code = $2,
                reset_code_expires = $3
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(code)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        expected_code: &str,
        password_hash: &str,
    ) -> StoreResult<bool> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $3,
                reset_code = NULL,
                reset_code_expires = NULL
            WHERE id = $1
              AND reset_code = $2
            "#,
        )
        .bind(user_id)
        .bind(expected_code)
        .bind(password_hash)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn insert_session(&self, session: &Session) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (session_token, user_id, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&session.session_token)
        .bind(session.user_id)
        .bind(session.expires_at)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_session(&self, token: &str) -> StoreResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT session_token, user_id, expires_at, created_at
            FROM sessions
            WHERE session_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    async fn delete_session(&self, token: &str) -> StoreResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM sessions WHERE session_token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn delete_expired_sessions(&self) -> StoreResult<u64> {
        let rows_affected = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
