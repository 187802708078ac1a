//! Authentication middleware for Axum

use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{models::User, service::require_admin as admin_gate, sessions, AuthError};
use crate::state::AppState;

/// How the current request proved its identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// Signed bearer token
    Jwt,
    /// Opaque server-side session
    Session,
}

/// Authenticated, verified user attached to the request extensions
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub method: AuthMethod,
}

/// Extract the opaque session token from the `session_token` cookie
pub fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(sessions::session_token_from_cookies)
}

/// Extract bearer token from Authorization header or session cookie
/// Prefers the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    if let Some(header) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        if let Some(token) = header.strip_prefix("Bearer ") {
            let token = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    extract_session_cookie(headers)
}

/// Middleware that requires an authenticated, verified user
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let Some(token) = extract_bearer_token(request.headers()) else {
        tracing::debug!(path = %path, "require_auth: no credentials");
        return AuthError::Unauthenticated.into_response();
    };

    match state.auth.authenticate(&token).await {
        Ok(auth_user) => {
            tracing::debug!(
                path = %path,
                user_id = %auth_user.user.id,
                auth_method = ?auth_user.method,
                "require_auth: authentication successful"
            );
            request.extensions_mut().insert(auth_user);
            next.run(request).await
        }
        Err(err) => {
            tracing::info!(path = %path, error = %err, "require_auth: authentication failed");
            err.into_response()
        }
    }
}

/// Middleware that requires an admin
///
/// Layered inside `require_auth`, whose `AuthUser` extension it checks.
pub async fn require_admin(request: Request, next: Next) -> Response {
    let Some(auth_user) = request.extensions().get::<AuthUser>() else {
        return AuthError::Unauthenticated.into_response();
    };

    if let Err(err) = admin_gate(&auth_user.user) {
        tracing::warn!(
            path = %request.uri().path(),
            user_id = %auth_user.user.id,
            "require_admin: access denied"
        );
        return err.into_response();
    }

    next.run(request).await
}
