//! Tests for the auth orchestrator
//!
//! Tests cover:
//! - Registration (validation, uniqueness, admin allow-list, email dispatch)
//! - Email verification (single-use codes, expiry)
//! - Login (username/email, enumeration resistance, unverified accounts)
//! - Request authentication (JWT and opaque sessions)
//! - Admin gating, logout, password reset, external session exchange

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use super::super::jwt::JwtManager;
    use super::super::middleware::AuthMethod;
    use super::super::provider::{ExternalIdentity, ProviderError, SessionResolver};
    use super::super::service::AuthService;
    use super::super::store::{CredentialStore, MemoryCredentialStore};
    use super::super::AuthError;
    use crate::email::{EmailDispatcher, EmailError};

    const SECRET: &str = "test-jwt-secret-key-for-testing-only";
    const ADMIN_EMAIL: &str = "admin@cizgihub.com";

    #[derive(Debug, Clone, PartialEq)]
    enum Sent {
        Verification { to: String, code: String },
        Reset { to: String, code: String },
    }

    /// Records every message and can be switched into failure mode
    #[derive(Default)]
    struct RecordingDispatcher {
        sent: Mutex<Vec<Sent>>,
        fail: AtomicBool,
    }

    impl RecordingDispatcher {
        fn failing(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        fn last_verification_code(&self, to: &str) -> Option<String> {
            self.sent.lock().unwrap().iter().rev().find_map(|m| match m {
                Sent::Verification { to: t, code } if t == to => Some(code.clone()),
                _ => None,
            })
        }

        fn last_reset_code(&self, to: &str) -> Option<String> {
            self.sent.lock().unwrap().iter().rev().find_map(|m| match m {
                Sent::Reset { to: t, code } if t == to => Some(code.clone()),
                _ => None,
            })
        }

        fn count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }

        fn record(&self, message: Sent) -> Result<(), EmailError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(EmailError::Rejected {
                    status: 503,
                    body: "unavailable".into(),
                });
            }
            self.sent.lock().unwrap().push(message);
            Ok(())
        }
    }

    #[async_trait]
    impl EmailDispatcher for RecordingDispatcher {
        async fn send_verification_email(&self, to: &str, code: &str) -> Result<(), EmailError> {
            self.record(Sent::Verification {
                to: to.into(),
                code: code.into(),
            })
        }

        async fn send_password_reset_email(&self, to: &str, code: &str) -> Result<(), EmailError> {
            self.record(Sent::Reset {
                to: to.into(),
                code: code.into(),
            })
        }
    }

    struct StaticResolver(Option<ExternalIdentity>);

    #[async_trait]
    impl SessionResolver for StaticResolver {
        async fn resolve_session(&self, _id: &str) -> Result<ExternalIdentity, ProviderError> {
            self.0.clone().ok_or(ProviderError::Rejected(401))
        }
    }

    struct Harness {
        service: AuthService,
        store: MemoryCredentialStore,
        mail: Arc<RecordingDispatcher>,
    }

    fn harness_with_resolver(resolver: Option<Arc<dyn SessionResolver>>) -> Harness {
        let store = MemoryCredentialStore::new();
        let mail = Arc::new(RecordingDispatcher::default());
        let service = AuthService::new(
            Arc::new(store.clone()),
            mail.clone(),
            JwtManager::new(SECRET, 24),
            ADMIN_EMAIL,
            resolver,
        );
        Harness {
            service,
            store,
            mail,
        }
    }

    fn harness() -> Harness {
        harness_with_resolver(None)
    }

    /// Register and verify in one step
    async fn verified_user(h: &Harness, username: &str, email: &str, password: &str) -> Uuid {
        let outcome = h.service.register(username, email, password).await.unwrap();
        let code = h.mail.last_verification_code(email).unwrap();
        h.service.verify_email(email, &code).await.unwrap();
        outcome.user_id
    }

    // =========================================================================
    // Registration
    // =========================================================================

    #[tokio::test]
    async fn test_register_requires_verification_and_dispatches_code() {
        let h = harness();
        let outcome = h
            .service
            .register("alice", "alice@x.com", "secret1")
            .await
            .unwrap();

        assert!(outcome.requires_verification);
        assert!(!outcome.is_admin);

        let code = h.mail.last_verification_code("alice@x.com").unwrap();
        assert_eq!(code.len(), 6);

        let stored = h.store.find_user_by_id(outcome.user_id).await.unwrap().unwrap();
        assert!(!stored.is_verified);
        assert_eq!(stored.verification_code.as_deref(), Some(code.as_str()));
        assert!(stored.verification_code_expires.is_some());
        assert!(!stored.password_hash.is_empty());
        assert_ne!(stored.password_hash, "secret1");
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let h = harness();
        let long_name = "a".repeat(21);

        for (username, email, password) in [
            ("al", "al@x.com", "secret1"),
            (long_name.as_str(), "long@x.com", "secret1"),
            ("bad name", "bad@x.com", "secret1"),
            ("alice", "not-an-email", "secret1"),
            ("alice", "alice@x.com", "12345"),
        ] {
            let err = h.service.register(username, email, password).await.unwrap_err();
            assert!(
                matches!(err, AuthError::InvalidInput(_)),
                "expected InvalidInput for {username}/{email}, got {err:?}"
            );
        }

        assert_eq!(h.store.user_count().await, 0);
        assert_eq!(h.mail.count(), 0);
    }

    #[tokio::test]
    async fn test_register_duplicates_are_case_insensitive() {
        let h = harness();
        h.service.register("alice", "alice@x.com", "secret1").await.unwrap();

        let err = h
            .service
            .register("ALICE", "other@x.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername));

        let err = h
            .service
            .register("bob", "Alice@X.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_duplicate_username_takes_precedence() {
        let h = harness();
        h.service.register("alice", "alice@x.com", "secret1").await.unwrap();

        let err = h
            .service
            .register("Alice", "ALICE@x.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername));
    }

    #[tokio::test]
    async fn test_register_survives_email_failure() {
        let h = harness();
        h.mail.failing(true);

        let outcome = h
            .service
            .register("alice", "alice@x.com", "secret1")
            .await
            .unwrap();

        assert!(outcome.requires_verification);
        let stored = h.store.find_user_by_id(outcome.user_id).await.unwrap().unwrap();
        assert!(!stored.is_verified);
        assert!(stored.verification_code.is_some());
    }

    #[tokio::test]
    async fn test_admin_registration_is_pre_verified() {
        let h = harness();
        let outcome = h
            .service
            .register("admin", "Admin@CizgiHub.com", "adminpw")
            .await
            .unwrap();

        assert!(outcome.is_admin);
        assert!(!outcome.requires_verification);
        assert_eq!(h.mail.count(), 0);

        let stored = h.store.find_user_by_id(outcome.user_id).await.unwrap().unwrap();
        assert!(stored.is_verified);
        assert!(stored.verification_code.is_none());
        assert!(stored.verification_code_expires.is_none());

        // Immediate login, no verification step
        let session = h.service.login("admin", "adminpw").await.unwrap();
        assert!(session.user.is_admin);
        assert!(session.user.is_verified);
    }

    // =========================================================================
    // Email verification
    // =========================================================================

    #[tokio::test]
    async fn test_alice_end_to_end() {
        let h = harness();
        let outcome = h
            .service
            .register("alice", "alice@x.com", "secret1")
            .await
            .unwrap();
        assert!(outcome.requires_verification);

        let code = h.mail.last_verification_code("alice@x.com").unwrap();
        let verified = h.service.verify_email("alice@x.com", &code).await.unwrap();
        assert!(verified.user.is_verified);
        assert_eq!(verified.user.id, outcome.user_id);
        assert!(!verified.token.is_empty());

        let login = h.service.login("alice", "secret1").await.unwrap();
        assert_eq!(login.user.username, "alice");
        assert_eq!(
            h.service.jwt().verify(&login.token).unwrap(),
            outcome.user_id
        );
    }

    #[tokio::test]
    async fn test_verification_code_is_single_use() {
        let h = harness();
        h.service.register("alice", "alice@x.com", "secret1").await.unwrap();
        let code = h.mail.last_verification_code("alice@x.com").unwrap();

        h.service.verify_email("alice@x.com", &code).await.unwrap();
        let err = h.service.verify_email("alice@x.com", &code).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));

        let stored = h.store.find_user_by_email("alice@x.com").await.unwrap().unwrap();
        assert!(stored.verification_code.is_none());
        assert!(stored.verification_code_expires.is_none());
    }

    #[tokio::test]
    async fn test_verify_wrong_code() {
        let h = harness();
        h.service.register("alice", "alice@x.com", "secret1").await.unwrap();
        let code = h.mail.last_verification_code("alice@x.com").unwrap();
        let wrong = if code == "100000" { "100001" } else { "100000" };

        let err = h.service.verify_email("alice@x.com", wrong).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));

        // Still verifiable with the right code afterwards
        assert!(h.service.verify_email("alice@x.com", &code).await.is_ok());
    }

    #[tokio::test]
    async fn test_verify_expired_code() {
        let h = harness();
        let outcome = h
            .service
            .register("alice", "alice@x.com", "secret1")
            .await
            .unwrap();

        let past = OffsetDateTime::now_utc() - Duration::minutes(16);
        h.store
            .set_verification_code(outcome.user_id, "654321", past)
            .await
            .unwrap();

        let err = h.service.verify_email("alice@x.com", "654321").await.unwrap_err();
        assert!(matches!(err, AuthError::CodeExpired));

        let stored = h.store.find_user_by_id(outcome.user_id).await.unwrap().unwrap();
        assert!(!stored.is_verified);
    }

    #[tokio::test]
    async fn test_verify_unknown_email() {
        let h = harness();
        let err = h
            .service
            .verify_email("ghost@x.com", "123456")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_verify_email_is_case_insensitive() {
        let h = harness();
        h.service.register("alice", "alice@x.com", "secret1").await.unwrap();
        let code = h.mail.last_verification_code("alice@x.com").unwrap();

        assert!(h.service.verify_email("ALICE@X.COM", &code).await.is_ok());
    }

    // =========================================================================
    // Resend verification
    // =========================================================================

    #[tokio::test]
    async fn test_resend_rotates_code() {
        let h = harness();
        h.service.register("alice", "alice@x.com", "secret1").await.unwrap();
        let first = h.mail.last_verification_code("alice@x.com").unwrap();

        h.service.resend_verification("alice@x.com").await.unwrap();
        let second = h.mail.last_verification_code("alice@x.com").unwrap();
        assert_eq!(h.mail.count(), 2);

        if first != second {
            let err = h.service.verify_email("alice@x.com", &first).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCode));
        }
        assert!(h.service.verify_email("alice@x.com", &second).await.is_ok());
    }

    #[tokio::test]
    async fn test_resend_errors() {
        let h = harness();

        let err = h.service.resend_verification("ghost@x.com").await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));

        verified_user(&h, "alice", "alice@x.com", "secret1").await;
        let err = h.service.resend_verification("alice@x.com").await.unwrap_err();
        assert!(matches!(err, AuthError::AlreadyVerified));
    }

    #[tokio::test]
    async fn test_resend_surfaces_delivery_failure() {
        let h = harness();
        h.service.register("alice", "alice@x.com", "secret1").await.unwrap();

        h.mail.failing(true);
        let err = h.service.resend_verification("alice@x.com").await.unwrap_err();
        assert!(matches!(err, AuthError::EmailDeliveryFailed));
    }

    // =========================================================================
    // Login
    // =========================================================================

    #[tokio::test]
    async fn test_unverified_login_always_fails_with_email_not_verified() {
        let h = harness();
        h.service.register("alice", "alice@x.com", "secret1").await.unwrap();

        for password in ["secret1", "wrong-password"] {
            let err = h.service.login("alice", password).await.unwrap_err();
            assert!(matches!(err, AuthError::EmailNotVerified));
        }
    }

    #[tokio::test]
    async fn test_login_by_username_or_email_case_insensitive() {
        let h = harness();
        let user_id = verified_user(&h, "alice", "alice@x.com", "secret1").await;

        for login in ["alice", "ALICE", "alice@x.com", "Alice@X.COM"] {
            let session = h.service.login(login, "secret1").await.unwrap();
            assert_eq!(session.user.id, user_id);
        }
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let h = harness();
        verified_user(&h, "alice", "alice@x.com", "secret1").await;

        let wrong_password = h.service.login("alice", "secret2").await.unwrap_err();
        let no_such_user = h.service.login("nobody", "secret1").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(no_such_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), no_such_user.to_string());
    }

    // =========================================================================
    // Request authentication
    // =========================================================================

    #[tokio::test]
    async fn test_authenticate_valid_token() {
        let h = harness();
        let user_id = verified_user(&h, "alice", "alice@x.com", "secret1").await;
        let session = h.service.login("alice", "secret1").await.unwrap();

        let auth_user = h.service.authenticate(&session.token).await.unwrap();
        assert_eq!(auth_user.user.id, user_id);
        assert_eq!(auth_user.method, AuthMethod::Jwt);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_foreign_secret() {
        let h = harness();
        let user_id = verified_user(&h, "alice", "alice@x.com", "secret1").await;

        let forged = JwtManager::new("some-other-secret", 24).issue(user_id).unwrap();
        let err = h.service.authenticate(&forged.token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_expired_token() {
        let h = harness();
        let user_id = verified_user(&h, "alice", "alice@x.com", "secret1").await;

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let expired = encode(
            &Header::default(),
            &serde_json::json!({ "sub": user_id, "iat": now - 90_000, "exp": now - 3_600 }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = h.service.authenticate(&expired).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_unknown_user() {
        let h = harness();
        let token = h.service.jwt().issue(Uuid::new_v4()).unwrap();

        let err = h.service.authenticate(&token.token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_unverified_user() {
        let h = harness();
        let outcome = h
            .service
            .register("alice", "alice@x.com", "secret1")
            .await
            .unwrap();
        let token = h.service.jwt().issue(outcome.user_id).unwrap();

        let err = h.service.authenticate(&token.token).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailNotVerified));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage() {
        let h = harness();
        for token in ["", "   ", "not-a-token", "a.b.c"] {
            let err = h.service.authenticate(token).await.unwrap_err();
            assert!(matches!(err, AuthError::Unauthenticated));
        }
    }

    // =========================================================================
    // Admin gate and logout
    // =========================================================================

    #[tokio::test]
    async fn test_require_admin() {
        let h = harness();
        verified_user(&h, "alice", "alice@x.com", "secret1").await;
        h.service.register("admin", ADMIN_EMAIL, "adminpw").await.unwrap();

        let alice = h.store.find_user_by_login("alice").await.unwrap().unwrap();
        let admin = h.store.find_user_by_login("admin").await.unwrap().unwrap();

        assert!(alice.is_verified);
        assert!(matches!(
            h.service.require_admin(&alice),
            Err(AuthError::Forbidden)
        ));
        assert!(h.service.require_admin(&admin).is_ok());
    }

    #[tokio::test]
    async fn test_logout_with_bearer_token_is_a_noop() {
        let h = harness();
        verified_user(&h, "alice", "alice@x.com", "secret1").await;
        let session = h.service.login("alice", "secret1").await.unwrap();

        assert!(!h.service.logout(Some(&session.token)).await.unwrap());
        assert!(!h.service.logout(None).await.unwrap());

        // Stateless: the token keeps working until it expires
        assert!(h.service.authenticate(&session.token).await.is_ok());
    }

    // =========================================================================
    // Opaque sessions via external exchange
    // =========================================================================

    fn bob_identity() -> ExternalIdentity {
        ExternalIdentity {
            email: "Bob@Y.com".into(),
            name: "Bob Builder".into(),
            picture: Some("https://img/bob.png".into()),
        }
    }

    #[tokio::test]
    async fn test_exchange_creates_verified_user_and_session() {
        let h = harness_with_resolver(Some(Arc::new(StaticResolver(Some(bob_identity())))));

        let exchange = h.service.exchange_session("sess-1").await.unwrap();
        assert_eq!(exchange.user.email, "bob@y.com");
        assert_eq!(exchange.user.username, "bob");
        assert!(exchange.user.is_verified);
        assert!(!exchange.user.is_admin);

        let auth_user = h.service.authenticate(&exchange.session_token).await.unwrap();
        assert_eq!(auth_user.method, AuthMethod::Session);
        assert_eq!(auth_user.user.id, exchange.user.id);
        assert_eq!(auth_user.user.display_name.as_deref(), Some("Bob Builder"));

        // Password login is impossible for provider-created accounts
        let err = h.service.login("bob", "").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        // Second exchange reuses the account
        let again = h.service.exchange_session("sess-2").await.unwrap();
        assert_eq!(again.user.id, exchange.user.id);
        assert_eq!(h.store.user_count().await, 1);
        assert_eq!(h.store.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_exchange_picks_free_username() {
        let h = harness_with_resolver(Some(Arc::new(StaticResolver(Some(bob_identity())))));
        verified_user(&h, "bob", "bob@elsewhere.com", "secret1").await;

        let exchange = h.service.exchange_session("sess-1").await.unwrap();
        assert_ne!(exchange.user.username, "bob");
        assert!(exchange.user.username.starts_with("bob"));
        assert!(exchange.user.username.len() <= 20);
    }

    #[tokio::test]
    async fn test_exchange_verifies_pending_registration() {
        let carol = ExternalIdentity {
            email: "Carol@X.com".into(),
            name: "Carol".into(),
            picture: None,
        };
        let h = harness_with_resolver(Some(Arc::new(StaticResolver(Some(carol)))));
        let outcome = h
            .service
            .register("carol", "carol@x.com", "secret1")
            .await
            .unwrap();
        assert!(outcome.requires_verification);

        let exchange = h.service.exchange_session("sess-1").await.unwrap();
        assert_eq!(exchange.user.id, outcome.user_id);
        assert!(exchange.user.is_verified);

        let auth_user = h.service.authenticate(&exchange.session_token).await.unwrap();
        assert_eq!(auth_user.user.id, outcome.user_id);

        let stored = h.store.find_user_by_id(outcome.user_id).await.unwrap().unwrap();
        assert!(stored.is_verified);
        assert!(stored.verification_code.is_none());

        // The emailed code is spent once the provider vouched for the address
        let code = h.mail.last_verification_code("carol@x.com").unwrap();
        let err = h.service.verify_email("carol@x.com", &code).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));

        // Password login works as for any verified account
        assert!(h.service.login("carol", "secret1").await.is_ok());
        assert_eq!(h.store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_exchange_rejected_by_provider() {
        let h = harness_with_resolver(Some(Arc::new(StaticResolver(None))));
        let err = h.service.exchange_session("bogus").await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_logout_revokes_opaque_session() {
        let h = harness_with_resolver(Some(Arc::new(StaticResolver(Some(bob_identity())))));
        let exchange = h.service.exchange_session("sess-1").await.unwrap();

        assert!(h.service.logout(Some(&exchange.session_token)).await.unwrap());

        let err = h
            .service
            .authenticate(&exchange.session_token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_expired_opaque_session_rejected_and_purged() {
        let h = harness();
        let user_id = verified_user(&h, "alice", "alice@x.com", "secret1").await;

        let stale = crate::auth::sessions::new_session(
            user_id,
            OffsetDateTime::now_utc() - Duration::days(8),
        );
        h.store.insert_session(&stale).await.unwrap();

        let err = h.service.authenticate(&stale.session_token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));

        assert_eq!(h.service.purge_expired_sessions().await.unwrap(), 1);
        assert_eq!(h.store.session_count().await, 0);
    }

    // =========================================================================
    // Password reset
    // =========================================================================

    #[tokio::test]
    async fn test_password_reset_flow() {
        let h = harness();
        verified_user(&h, "alice", "alice@x.com", "secret1").await;

        h.service.request_password_reset("Alice@x.com").await.unwrap();
        let code = h.mail.last_reset_code("alice@x.com").unwrap();

        h.service
            .reset_password("alice@x.com", &code, "newsecret")
            .await
            .unwrap();

        let err = h.service.login("alice", "secret1").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(h.service.login("alice", "newsecret").await.is_ok());

        // Reset codes are single-use too
        let err = h
            .service
            .reset_password("alice@x.com", &code, "another1")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));
    }

    #[tokio::test]
    async fn test_password_reset_for_unknown_email_is_silent() {
        let h = harness();
        h.service.request_password_reset("ghost@x.com").await.unwrap();
        assert_eq!(h.mail.count(), 0);

        let err = h
            .service
            .reset_password("ghost@x.com", "123456", "newsecret")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));
    }

    #[tokio::test]
    async fn test_password_reset_expired_code() {
        let h = harness();
        let user_id = verified_user(&h, "alice", "alice@x.com", "secret1").await;

        h.store
            .set_reset_code(
                user_id,
                "222333",
                OffsetDateTime::now_utc() - Duration::minutes(1),
            )
            .await
            .unwrap();

        let err = h
            .service
            .reset_password("alice@x.com", "222333", "newsecret")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::CodeExpired));
        assert!(h.service.login("alice", "secret1").await.is_ok());
    }

    #[tokio::test]
    async fn test_password_reset_validates_new_password() {
        let h = harness();
        verified_user(&h, "alice", "alice@x.com", "secret1").await;
        h.service.request_password_reset("alice@x.com").await.unwrap();
        let code = h.mail.last_reset_code("alice@x.com").unwrap();

        let err = h
            .service
            .reset_password("alice@x.com", &code, "short")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }
}
