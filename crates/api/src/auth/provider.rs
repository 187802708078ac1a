//! External session-exchange provider
//!
//! The OAuth front end hands the client an opaque session id; the provider's
//! session-data endpoint trades it for a verified identity.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalIdentity {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("session id rejected by provider (status {0})")]
    Rejected(u16),
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve_session(&self, session_id: &str) -> Result<ExternalIdentity, ProviderError>;
}

#[derive(Clone)]
pub struct HttpSessionResolver {
    client: Client,
    session_data_url: String,
}

impl HttpSessionResolver {
    pub fn new(client: Client, session_data_url: String) -> Self {
        Self {
            client,
            session_data_url,
        }
    }
}

#[async_trait]
impl SessionResolver for HttpSessionResolver {
    async fn resolve_session(&self, session_id: &str) -> Result<ExternalIdentity, ProviderError> {
        let response = self
            .client
            .get(&self.session_data_url)
            .header("X-Session-ID", session_id)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ProviderError::Rejected(response.status().as_u16()));
        }

        Ok(response.json::<ExternalIdentity>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_identity_from_session_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/session-data")
            .match_header("x-session-id", "sess-123")
            .with_status(200)
            .with_body(r#"{"id":"ext-1","email":"Bob@Y.com","name":"Bob","picture":"https://img/b.png"}"#)
            .create_async()
            .await;

        let resolver =
            HttpSessionResolver::new(Client::new(), format!("{}/session-data", server.url()));
        let identity = resolver.resolve_session("sess-123").await.unwrap();

        assert_eq!(identity.email, "Bob@Y.com");
        assert_eq!(identity.name, "Bob");
        assert_eq!(identity.picture.as_deref(), Some("https://img/b.png"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_200_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/session-data")
            .with_status(404)
            .create_async()
            .await;

        let resolver =
            HttpSessionResolver::new(Client::new(), format!("{}/session-data", server.url()));
        let err = resolver.resolve_session("bogus").await.unwrap_err();

        assert!(matches!(err, ProviderError::Rejected(404)));
    }
}
