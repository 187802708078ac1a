//! Read-only catalogue routes: shows, seasons, episodes
//!
//! Listings are single reads capped at [`LISTING_LIMIT`] rows.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

pub const LISTING_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Show {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub year: i32,
    pub rating: f64,
    pub poster_url: String,
    pub banner_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Season {
    pub id: Uuid,
    pub show_id: Uuid,
    pub season_number: i32,
    pub title: String,
    pub episode_count: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Episode {
    pub id: Uuid,
    pub season_id: Uuid,
    pub episode_number: i32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub turkish_subtitles: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct ShowDetailResponse {
    pub show: Show,
    pub seasons: Vec<Season>,
}

pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Json<Vec<Show>>> {
    let shows: Vec<Show> = sqlx::query_as(
        r#"
        SELECT id, title, description, genre, year, rating, poster_url, banner_url, created_at
        FROM shows
        ORDER BY created_at
        LIMIT $1
        "#,
    )
    .bind(LISTING_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(shows))
}

pub async fn get_show(
    State(state): State<AppState>,
    Path(show_id): Path<Uuid>,
) -> ApiResult<Json<ShowDetailResponse>> {
    let show: Show = sqlx::query_as(
        r#"
        SELECT id, title, description, genre, year, rating, poster_url, banner_url, created_at
        FROM shows
        WHERE id = $1
        "#,
    )
    .bind(show_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(ApiError::NotFound)?;

    let seasons: Vec<Season> = sqlx::query_as(
        r#"
        SELECT id, show_id, season_number, title, episode_count, created_at
        FROM seasons
        WHERE show_id = $1
        ORDER BY season_number
        LIMIT $2
        "#,
    )
    .bind(show_id)
    .bind(LISTING_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(ShowDetailResponse { show, seasons }))
}

pub async fn list_episodes(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Episode>>> {
    let episodes: Vec<Episode> = sqlx::query_as(
        r#"
        SELECT id, season_id, episode_number, title, description, duration,
               video_url, thumbnail_url, turkish_subtitles, created_at
        FROM episodes
        WHERE season_id = $1
        ORDER BY episode_number
        LIMIT $2
        "#,
    )
    .bind(season_id)
    .bind(LISTING_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(episodes))
}

pub async fn get_episode(
    State(state): State<AppState>,
    Path(episode_id): Path<Uuid>,
) -> ApiResult<Json<Episode>> {
    let episode: Episode = sqlx::query_as(
        r#"
        SELECT id, season_id, episode_number, title, description, duration,
               video_url, thumbnail_url, turkish_subtitles, created_at
        FROM episodes
        WHERE id = $1
        "#,
    )
    .bind(episode_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok(Json(episode))
}
