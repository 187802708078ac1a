//! Auth orchestrator
//!
//! Composes the credential store, password hasher, code generator, token
//! issuer and email dispatcher into the registration, verification, login
//! and request-authentication flows. Holds no per-request state; everything
//! durable goes through the store.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{
    codes::{code_expiry, codes_match, generate_code},
    jwt::{looks_like_jwt, JwtManager},
    middleware::{AuthMethod, AuthUser},
    models::{NewUser, PublicUser, User},
    password::{
        generate_impossible_hash, hash_password, normalize_email, validate_email,
        validate_password_strength, validate_username, verify_against_dummy, verify_password,
        MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH,
    },
    provider::SessionResolver,
    sessions::new_session,
    store::{CredentialStore, StoreError, UniqueField},
    AuthError,
};
use crate::email::EmailDispatcher;

#[derive(Debug, Clone, Serialize)]
pub struct RegisterOutcome {
    pub user_id: Uuid,
    pub is_admin: bool,
    pub requires_verification: bool,
}

/// Bearer token plus the user it was issued to
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: PublicUser,
}

/// Opaque session created by an external-provider exchange
#[derive(Debug, Clone, Serialize)]
pub struct SessionExchange {
    pub session_token: String,
    pub user: PublicUser,
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    email: Arc<dyn EmailDispatcher>,
    jwt: JwtManager,
    admin_email: String,
    resolver: Option<Arc<dyn SessionResolver>>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        email: Arc<dyn EmailDispatcher>,
        jwt: JwtManager,
        admin_email: &str,
        resolver: Option<Arc<dyn SessionResolver>>,
    ) -> Self {
        Self {
            store,
            email,
            jwt,
            admin_email: normalize_email(admin_email),
            resolver,
        }
    }

    pub fn jwt(&self) -> &JwtManager {
        &self.jwt
    }

    pub fn has_session_provider(&self) -> bool {
        self.resolver.is_some()
    }

    fn is_admin_email(&self, normalized_email: &str) -> bool {
        !self.admin_email.is_empty() && normalized_email == self.admin_email
    }

    fn issue_session(&self, user: &User) -> Result<AuthSession, AuthError> {
        let issued = self
            .jwt
            .issue(user.id)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(AuthSession {
            token: issued.token,
            user: user.public(),
        })
    }

    /// Create an account
    ///
    /// Non-admin accounts start unverified and get a code by email. A failed
    /// dispatch is logged but the account stays; the user can ask for a
    /// resend.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterOutcome, AuthError> {
        let username = username.trim();
        let email = normalize_email(email);

        validate_username(username)?;
        validate_email(&email)?;
        validate_password_strength(password)?;

        // Friendlier errors only: the unique indexes decide.
        if self.store.username_exists(username).await? {
            return Err(AuthError::DuplicateUsername);
        }
        if self.store.email_exists(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        let is_admin = self.is_admin_email(&email);
        let password_hash = hash_password(password)?;

        let (verification_code, verification_code_expires) = if is_admin {
            (None, None)
        } else {
            (
                Some(generate_code()),
                Some(code_expiry(OffsetDateTime::now_utc())),
            )
        };

        let user = self
            .store
            .insert_user(NewUser {
                username: username.to_string(),
                email: email.clone(),
                password_hash,
                display_name: None,
                picture: None,
                is_admin,
                is_verified: is_admin,
                verification_code: verification_code.clone(),
                verification_code_expires,
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            is_admin,
            "User registered"
        );

        if let Some(code) = verification_code {
            if let Err(e) = self.email.send_verification_email(&email, &code).await {
                tracing::warn!(
                    user_id = %user.id,
                    error = %e,
                    "Verification email failed; account left unverified"
                );
            }
        }

        Ok(RegisterOutcome {
            user_id: user.id,
            is_admin,
            requires_verification: !is_admin,
        })
    }

    /// Consume a verification code and sign the user in
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<AuthSession, AuthError> {
        let email = normalize_email(email);
        let mut user = self
            .store
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let (Some(stored_code), Some(expires_at)) =
            (&user.verification_code, user.verification_code_expires)
        else {
            return Err(AuthError::InvalidCode);
        };

        if !codes_match(stored_code, code) {
            tracing::debug!(user_id = %user.id, "Verification code mismatch");
            return Err(AuthError::InvalidCode);
        }
        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::CodeExpired);
        }

        if user.is_verified {
            return Err(AuthError::AlreadyVerified);
        }
        // Conditional on the code we checked; a concurrent verify or resend wins
        if !self.store.mark_verified(user.id, Some(stored_code)).await? {
            let current = self.store.find_user_by_id(user.id).await?;
            return Err(match current {
                Some(current) if current.is_verified => AuthError::AlreadyVerified,
                _ => AuthError::InvalidCode,
            });
        }

        user.is_verified = true;
        user.verification_code = None;
        user.verification_code_expires = None;

        tracing::info!(user_id = %user.id, "Email verified");
        self.issue_session(&user)
    }

    /// Rotate the verification code and send it again
    pub async fn resend_verification(&self, email: &str) -> Result<(), AuthError> {
        let email = normalize_email(email);
        let user = self
            .store
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified {
            return Err(AuthError::AlreadyVerified);
        }

        let code = generate_code();
        self.store
            .set_verification_code(user.id, &code, code_expiry(OffsetDateTime::now_utc()))
            .await?;

        self.email
            .send_verification_email(&user.email, &code)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Verification resend failed");
                AuthError::EmailDeliveryFailed
            })?;

        tracing::info!(user_id = %user.id, "Verification code re-sent");
        Ok(())
    }

    /// Password login by username or email
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthSession, AuthError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let Some(user) = self.store.find_user_by_login(identifier).await? else {
            verify_against_dummy(password);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.is_verified {
            return Err(AuthError::EmailNotVerified);
        }

        if !verify_password(password, &user.password_hash) {
            tracing::info!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        self.issue_session(&user)
    }

    /// Resolve a bearer string to a verified user
    ///
    /// JWT-shaped tokens are checked by signature; anything else is looked
    /// up as an opaque session.
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::Unauthenticated);
        }

        let (user_id, method) = if looks_like_jwt(token) {
            let user_id = self.jwt.verify(token).map_err(|e| {
                tracing::debug!(error = %e, "Bearer token rejected");
                AuthError::Unauthenticated
            })?;
            (user_id, AuthMethod::Jwt)
        } else {
            let session = self
                .store
                .find_session(token)
                .await?
                .ok_or(AuthError::Unauthenticated)?;

            if session.is_expired(OffsetDateTime::now_utc()) {
                tracing::debug!(user_id = %session.user_id, "Opaque session expired");
                return Err(AuthError::Unauthenticated);
            }
            (session.user_id, AuthMethod::Session)
        };

        let user = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token refers to a missing user");
                AuthError::Unauthenticated
            })?;

        if !user.is_verified {
            return Err(AuthError::EmailNotVerified);
        }

        Ok(AuthUser { user, method })
    }

    pub fn require_admin(&self, user: &User) -> Result<(), AuthError> {
        require_admin(user)
    }

    /// Revoke an opaque session; bearer JWTs cannot be revoked server-side
    ///
    /// Returns whether a session record was deleted.
    pub async fn logout(&self, token: Option<&str>) -> Result<bool, AuthError> {
        match token.map(str::trim) {
            Some(token) if !token.is_empty() && !looks_like_jwt(token) => {
                let revoked = self.store.delete_session(token).await?;
                if revoked {
                    tracing::info!("Opaque session revoked");
                }
                Ok(revoked)
            }
            _ => Ok(false),
        }
    }

    /// Trade an external provider's session id for a local opaque session
    pub async fn exchange_session(&self, session_id: &str) -> Result<SessionExchange, AuthError> {
        let resolver = self
            .resolver
            .as_ref()
            .ok_or_else(|| AuthError::Internal("session provider not configured".to_string()))?;

        let identity = resolver.resolve_session(session_id).await.map_err(|e| {
            tracing::warn!(error = %e, "External session exchange rejected");
            AuthError::Unauthenticated
        })?;

        let email = normalize_email(&identity.email);
        validate_email(&email).map_err(|_| AuthError::Unauthenticated)?;

        let user = match self.store.find_user_by_email(&email).await? {
            // The provider vouches for the address
            Some(mut user) if !user.is_verified => {
                self.store.mark_verified(user.id, None).await?;
                user.is_verified = true;
                user.verification_code = None;
                user.verification_code_expires = None;
                tracing::info!(user_id = %user.id, "Email verified by external identity");
                user
            }
            Some(user) => user,
            None => {
                let username = self.available_username(&email).await?;
                let is_admin = self.is_admin_email(&email);
                let inserted = self
                    .store
                    .insert_user(NewUser {
                        username,
                        email: email.clone(),
                        password_hash: generate_impossible_hash()?,
                        display_name: Some(identity.name.clone()),
                        picture: identity.picture.clone(),
                        is_admin,
                        is_verified: true,
                        verification_code: None,
                        verification_code_expires: None,
                    })
                    .await;

                match inserted {
                    Ok(user) => {
                        tracing::info!(user_id = %user.id, is_admin, "User created from external identity");
                        user
                    }
                    // Concurrent first login for the same address
                    Err(StoreError::UniqueViolation(UniqueField::Email)) => self
                        .store
                        .find_user_by_email(&email)
                        .await?
                        .ok_or_else(|| AuthError::Internal("user vanished after insert race".into()))?,
                    Err(e) => return Err(e.into()),
                }
            }
        };

        let session = new_session(user.id, OffsetDateTime::now_utc());
        self.store.insert_session(&session).await?;

        tracing::info!(user_id = %user.id, "Opaque session created");
        Ok(SessionExchange {
            session_token: session.session_token,
            user: user.public(),
        })
    }

    /// Derive a free username from the local part of an email address
    async fn available_username(&self, email: &str) -> Result<String, AuthError> {
        let local = email.split('@').next().unwrap_or_default();
        let mut base: String = local
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .take(MAX_USERNAME_LENGTH - 4)
            .collect();
        if base.chars().count() < MIN_USERNAME_LENGTH {
            base = format!("user{base}");
        }

        if !self.store.username_exists(&base).await? {
            return Ok(base);
        }

        for _ in 0..5 {
            let candidate = format!("{base}{:04}", rand::rng().random_range(0..10_000));
            if !self.store.username_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        let fallback = Uuid::new_v4().simple().to_string();
        Ok(format!("user{}", &fallback[..12]))
    }

    /// Send a reset code to a verified account
    ///
    /// Unknown or unverified addresses get the same outward result.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let email = normalize_email(email);
        let user = match self.store.find_user_by_email(&email).await? {
            Some(user) if user.is_verified => user,
            _ => {
                tracing::debug!("Password reset requested for unknown or unverified address");
                return Ok(());
            }
        };

        let code = generate_code();
        self.store
            .set_reset_code(user.id, &code, code_expiry(OffsetDateTime::now_utc()))
            .await?;

        self.email
            .send_password_reset_email(&user.email, &code)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Password reset email failed");
                AuthError::EmailDeliveryFailed
            })?;

        tracing::info!(user_id = %user.id, "Password reset code sent");
        Ok(())
    }

    /// Consume a reset code and replace the password
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_password_strength(new_password)?;

        let email = normalize_email(email);
        let user = self
            .store
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCode)?;

        let (Some(stored_code), Some(expires_at)) = (&user.reset_code, user.reset_code_expires)
        else {
            return Err(AuthError::InvalidCode);
        };

        if !codes_match(stored_code, code) {
            return Err(AuthError::InvalidCode);
        }
        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::CodeExpired);
        }

        let password_hash = hash_password(new_password)?;
        // Conditional on the code we checked; a concurrent reset or new code wins
        if !self
            .store
            .update_password(user.id, stored_code, &password_hash)
            .await?
        {
            return Err(AuthError::InvalidCode);
        }

        tracing::info!(user_id = %user.id, "Password reset");
        Ok(())
    }

    pub async fn purge_expired_sessions(&self) -> Result<u64, AuthError> {
        Ok(self.store.delete_expired_sessions().await?)
    }
}

/// Admin gate: no side effects
pub fn require_admin(user: &User) -> Result<(), AuthError> {
    if user.is_admin {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
