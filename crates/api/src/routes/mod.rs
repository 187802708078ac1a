//! HTTP routes

use axum::{
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    auth::{require_admin, require_auth},
    state::AppState,
};

pub mod admin;
pub mod auth;
pub mod comments;
pub mod content;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let mut public = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/verify-email", post(auth::verify_email))
        .route("/auth/resend-verification", post(auth::resend_verification))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/forgot-password", post(auth::forgot_password))
        .route("/auth/reset-password", post(auth::reset_password));

    if state.auth.has_session_provider() {
        public = public.route("/auth/profile", post(auth::profile));
    }

    let protected = Router::new()
        .route("/auth/me", get(auth::me))
        .route("/shows", get(content::list_shows))
        .route("/shows/{id}", get(content::get_show))
        .route("/seasons/{id}/episodes", get(content::list_episodes))
        .route("/episodes/{id}", get(content::get_episode))
        .route("/episodes/{id}/comments", get(comments::list_comments))
        .route("/comments", post(comments::create_comment))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Outermost layer runs first: authenticate, then check the admin flag
    let admin = Router::new()
        .route("/admin/comments/{id}", delete(admin::delete_comment))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health))
        .nest("/api", public.merge(protected).merge(admin))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
