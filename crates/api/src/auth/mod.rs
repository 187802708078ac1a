//! Authentication module for ÇizgiHub

pub mod codes;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod provider;
pub mod service;
#[cfg(test)]
mod service_tests;
pub mod sessions;
pub mod store;

pub use error::AuthError;
pub use jwt::{Claims, JwtError, JwtManager};
pub use middleware::{
    extract_bearer_token, extract_session_cookie, require_admin, require_auth, AuthMethod,
    AuthUser,
};
pub use models::{PublicUser, Session, User};
pub use password::{
    generate_impossible_hash, hash_password, validate_password_strength, verify_password,
};
pub use provider::{ExternalIdentity, HttpSessionResolver, SessionResolver};
pub use service::{AuthService, AuthSession, RegisterOutcome, SessionExchange};
pub use store::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
