//! Application state

use std::sync::Arc;

use reqwest::Client;
use sqlx::PgPool;

use crate::{
    auth::{
        AuthService, CredentialStore, HttpSessionResolver, JwtManager, PgCredentialStore,
        SessionResolver,
    },
    config::Config,
    email::{dispatcher_from_config, EmailDispatcher},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Content and comment queries go straight to the pool
    pub pool: PgPool,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let http_client = Client::new();

        let store: Arc<dyn CredentialStore> = Arc::new(PgCredentialStore::new(pool.clone()));
        let email = dispatcher_from_config(config, http_client.clone());

        let resolver: Option<Arc<dyn SessionResolver>> = match &config.session_provider_url {
            Some(url) => {
                tracing::info!("External session exchange enabled via {}", url);
                Some(Arc::new(HttpSessionResolver::new(
                    http_client.clone(),
                    url.clone(),
                )))
            }
            None => {
                tracing::info!("External session exchange disabled (missing SESSION_PROVIDER_URL)");
                None
            }
        };

        Self::with_parts(pool, config, store, email, resolver)
    }

    /// Assemble state from explicit collaborators
    pub fn with_parts(
        pool: PgPool,
        config: &Config,
        store: Arc<dyn CredentialStore>,
        email: Arc<dyn EmailDispatcher>,
        resolver: Option<Arc<dyn SessionResolver>>,
    ) -> Self {
        let jwt = JwtManager::new(&config.jwt_secret, config.jwt_expiry_hours);
        let auth = AuthService::new(store, email, jwt, &config.admin_email, resolver);

        if config.admin_email.trim().is_empty() {
            tracing::warn!("ADMIN_EMAIL is empty; no account will be promoted to admin");
        }

        Self { pool, auth }
    }
}
