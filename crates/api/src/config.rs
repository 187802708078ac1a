//! Application configuration
//!
//! Loaded once at startup from the environment (a `.env` file is honoured
//! via dotenvy in `main`).

use std::env;

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::RngCore;

use crate::auth::jwt::DEFAULT_EXPIRY_HOURS;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8001";
const DEFAULT_ADMIN_EMAIL: &str = "admin@cizgihub.com";
const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
const DEFAULT_EMAIL_FROM: &str = "ÇizgiHub <noreply@cizgihub.com>";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_address: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    /// Address that is promoted to admin (and pre-verified) on registration
    pub admin_email: String,
    /// Empty disables real delivery; codes are logged instead
    pub resend_api_key: String,
    pub resend_api_url: String,
    pub email_from: String,
    /// Session-data endpoint of the external OAuth provider, if any
    pub session_provider_url: Option<String>,
    pub allowed_origins: Vec<String>,
    pub log_format: LogFormat,
}

// Secrets stay out of Debug output
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_max_connections", &self.database_max_connections)
            .field("bind_address", &self.bind_address)
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("admin_email", &self.admin_email)
            .field("resend_configured", &!self.resend_api_key.is_empty())
            .field("resend_api_url", &self.resend_api_url)
            .field("email_from", &self.email_from)
            .field("session_provider_url", &self.session_provider_url)
            .field("allowed_origins", &self.allowed_origins)
            .field("log_format", &self.log_format)
            .finish_non_exhaustive()
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_var(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

/// Per-process secret used when JWT_SECRET is unset
fn random_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = optional_var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let jwt_secret = match optional_var("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!(
                    "JWT_SECRET not set; using a random secret. Tokens will not survive a restart."
                );
                random_secret()
            }
        };

        let jwt_expiry_hours = parse_var("JWT_EXPIRY_HOURS", DEFAULT_EXPIRY_HOURS)?;
        if jwt_expiry_hours <= 0 {
            anyhow::bail!("JWT_EXPIRY_HOURS must be positive");
        }

        let log_format = match var_or("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            database_url,
            database_max_connections: parse_var(
                "DATABASE_MAX_CONNECTIONS",
                cizgihub_shared::DEFAULT_MAX_CONNECTIONS,
            )?,
            bind_address: var_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            jwt_secret,
            jwt_expiry_hours,
            admin_email: var_or("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            resend_api_key: optional_var("RESEND_API_KEY").unwrap_or_default(),
            resend_api_url: var_or("RESEND_API_URL", DEFAULT_RESEND_API_URL),
            email_from: var_or("EMAIL_FROM", DEFAULT_EMAIL_FROM),
            session_provider_url: optional_var("SESSION_PROVIDER_URL"),
            allowed_origins: var_or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            log_format,
        })
    }

    /// Fixed configuration for tests; never touches the environment
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            database_url: "postgres://localhost/cizgihub_test".to_string(),
            database_max_connections: 1,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            jwt_secret: "test-jwt-secret-key-for-testing-only".to_string(),
            jwt_expiry_hours: DEFAULT_EXPIRY_HOURS,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            resend_api_key: String::new(),
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            email_from: DEFAULT_EMAIL_FROM.to_string(),
            session_provider_url: None,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGINS.to_string()],
            log_format: LogFormat::Text,
        }
    }
}
