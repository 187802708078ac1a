//! Episode comments

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use super::content::LISTING_LIMIT;
use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    extract::ApiJson,
    state::AppState,
};

pub const MAX_COMMENT_LENGTH: usize = 2000;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub episode_id: Uuid,
    pub user_id: Uuid,
    /// Author's username at the time of posting
    pub user_name: String,
    pub content: String,
    pub is_spoiler: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub episode_id: Uuid,
    pub content: String,
    #[serde(default)]
    pub is_spoiler: bool,
}

/// Trimmed comment body, or the reason it is rejected
pub fn validate_comment(content: &str) -> Result<&str, ApiError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::Validation("Comment cannot be empty".into()));
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(ApiError::Validation(format!(
            "Comment must be at most {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(content)
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(episode_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Comment>>> {
    let comments: Vec<Comment> = sqlx::query_as(
        r#"
        SELECT id, episode_id, user_id, user_name, content, is_spoiler, created_at
        FROM comments
        WHERE episode_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(episode_id)
    .bind(LISTING_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ApiJson(req): ApiJson<CreateCommentRequest>,
) -> ApiResult<Json<Comment>> {
    let content = validate_comment(&req.content)?;

    let episode_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM episodes WHERE id = $1)")
            .bind(req.episode_id)
            .fetch_one(&state.pool)
            .await?;
    if !episode_exists {
        return Err(ApiError::NotFound);
    }

    let comment: Comment = sqlx::query_as(
        r#"
        INSERT INTO comments (id, episode_id, user_id, user_name, content, is_spoiler, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW())
        RETURNING id, episode_id, user_id, user_name, content, is_spoiler, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.episode_id)
    .bind(auth_user.user.id)
    .bind(&auth_user.user.username)
    .bind(content)
    .bind(req.is_spoiler)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(
        comment_id = %comment.id,
        episode_id = %comment.episode_id,
        user_id = %comment.user_id,
        "Comment posted"
    );

    Ok(Json(comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_is_trimmed() {
        assert_eq!(validate_comment("  harika bölüm  ").unwrap(), "harika bölüm");
    }

    #[test]
    fn test_blank_comment_rejected() {
        assert!(matches!(validate_comment(""), Err(ApiError::Validation(_))));
        assert!(matches!(validate_comment(" \n\t "), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_length_counted_in_characters() {
        let at_limit = "ç".repeat(MAX_COMMENT_LENGTH);
        assert!(validate_comment(&at_limit).is_ok());

        let over = "ç".repeat(MAX_COMMENT_LENGTH + 1);
        assert!(matches!(validate_comment(&over), Err(ApiError::Validation(_))));
    }
}
