//! Outbound email for verification and password-reset codes
//!
//! Delivery goes through the Resend HTTP API when `RESEND_API_KEY` is set.
//! Without a key the [`LogEmailDispatcher`] is used, which only records that
//! a message would have been sent.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("email request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email API rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn send_verification_email(&self, to: &str, code: &str) -> Result<(), EmailError>;

    async fn send_password_reset_email(&self, to: &str, code: &str) -> Result<(), EmailError>;
}

/// Resend API client
#[derive(Clone)]
pub struct ResendEmailDispatcher {
    client: Client,
    api_key: String,
    api_url: String,
    from: String,
}

impl ResendEmailDispatcher {
    pub fn new(client: Client, api_key: String, api_url: String, from: String) -> Self {
        Self {
            client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            from,
        }
    }

    async fn send(&self, to: &str, subject: &str, html: String) -> Result<(), EmailError> {
        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": [to],
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(to = %to, status = %status, "Email API rejected message");
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}

fn code_email_html(heading: &str, intro: &str, code: &str) -> String {
    format!(
        r#"<div style="font-family: sans-serif; max-width: 480px; margin: 0 auto;">
  <h2>{heading}</h2>
  <p>{intro}</p>
  <p style="font-size: 32px; font-weight: bold; letter-spacing: 6px;">{code}</p>
  <p>Bu kod 15 dakika geçerlidir.</p>
</div>"#
    )
}

#[async_trait]
impl EmailDispatcher for ResendEmailDispatcher {
    async fn send_verification_email(&self, to: &str, code: &str) -> Result<(), EmailError> {
        let html = code_email_html(
            "ÇizgiHub e-posta doğrulama",
            "Hesabınızı doğrulamak için aşağıdaki kodu kullanın:",
            code,
        );
        self.send(to, "ÇizgiHub doğrulama kodunuz", html).await
    }

    async fn send_password_reset_email(&self, to: &str, code: &str) -> Result<(), EmailError> {
        let html = code_email_html(
            "ÇizgiHub şifre sıfırlama",
            "Şifrenizi sıfırlamak için aşağıdaki kodu kullanın:",
            code,
        );
        self.send(to, "ÇizgiHub şifre sıfırlama kodunuz", html).await
    }
}

/// Development dispatcher: logs the recipient and reports success
#[derive(Clone, Debug, Default)]
pub struct LogEmailDispatcher;

#[async_trait]
impl EmailDispatcher for LogEmailDispatcher {
    async fn send_verification_email(&self, to: &str, _code: &str) -> Result<(), EmailError> {
        tracing::info!(to = %to, "Email delivery disabled; verification email not sent");
        Ok(())
    }

    async fn send_password_reset_email(&self, to: &str, _code: &str) -> Result<(), EmailError> {
        tracing::info!(to = %to, "Email delivery disabled; password reset email not sent");
        Ok(())
    }
}

/// Pick the dispatcher the configuration allows
pub fn dispatcher_from_config(config: &Config, client: Client) -> Arc<dyn EmailDispatcher> {
    if config.resend_api_key.is_empty() {
        tracing::warn!("Email delivery not configured (missing RESEND_API_KEY)");
        Arc::new(LogEmailDispatcher)
    } else {
        tracing::info!("Email delivery enabled via {}", config.resend_api_url);
        Arc::new(ResendEmailDispatcher::new(
            client,
            config.resend_api_key.clone(),
            config.resend_api_url.clone(),
            config.email_from.clone(),
        ))
    }
}
