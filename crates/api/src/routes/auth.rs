//! Authentication routes

use axum::{
    extract::{Extension, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{
        extract_bearer_token, extract_session_cookie, AuthError, AuthSession, AuthUser,
        PublicUser, RegisterOutcome, SessionExchange,
    },
    error::ApiResult,
    extract::ApiJson,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub verification_code: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email address
    pub login: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<Json<RegisterOutcome>> {
    let outcome = state
        .auth
        .register(&req.username, &req.email, &req.password)
        .await?;
    Ok(Json(outcome))
}

pub async fn verify_email(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<VerifyEmailRequest>,
) -> ApiResult<Json<AuthSession>> {
    let session = state
        .auth
        .verify_email(&req.email, &req.verification_code)
        .await?;
    Ok(Json(session))
}

pub async fn resend_verification(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<EmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.auth.resend_verification(&req.email).await?;
    Ok(MessageResponse::new("Doğrulama kodu tekrar gönderildi"))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<AuthSession>> {
    let session = state.auth.login(&req.login, &req.password).await?;
    Ok(Json(session))
}

pub async fn me(Extension(auth_user): Extension<AuthUser>) -> Json<PublicUser> {
    Json(auth_user.user.public())
}

/// Always acknowledges; only opaque sessions have anything to revoke
///
/// The session cookie is revoked even when a bearer header is also sent.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<MessageResponse>> {
    let bearer = extract_bearer_token(&headers);
    let cookie = extract_session_cookie(&headers);

    state.auth.logout(bearer.as_deref()).await?;
    if cookie.is_some() && cookie != bearer {
        state.auth.logout(cookie.as_deref()).await?;
    }
    Ok(MessageResponse::new("Başarıyla çıkış yapıldı"))
}

pub async fn profile(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProfileRequest>,
) -> ApiResult<Json<SessionExchange>> {
    if req.session_id.trim().is_empty() {
        return Err(AuthError::InvalidInput("session_id is required".into()).into());
    }
    let exchange = state.auth.exchange_session(req.session_id.trim()).await?;
    Ok(Json(exchange))
}

pub async fn forgot_password(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<EmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.auth.request_password_reset(&req.email).await?;
    Ok(MessageResponse::new(
        "Hesap mevcutsa şifre sıfırlama kodu gönderildi",
    ))
}

pub async fn reset_password(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .auth
        .reset_password(&req.email, &req.code, &req.new_password)
        .await?;
    Ok(MessageResponse::new("Şifre güncellendi"))
}
