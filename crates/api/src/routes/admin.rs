//! Admin moderation routes
//!
//! Mounted behind `require_admin`; handlers can assume an admin caller.

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use uuid::Uuid;

use super::auth::MessageResponse;
use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(comment_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(comment_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::info!(
        comment_id = %comment_id,
        admin_id = %auth_user.user.id,
        "Comment deleted by admin"
    );

    Ok(Json(MessageResponse {
        message: "Yorum silindi".to_string(),
    }))
}
