//! Video record CRUD handlers.

use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::handlers::parse_video_id;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reelvault_core::models::VideoResponse;
use reelvault_core::AppError;
use reelvault_db::NewVideo;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn create_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Json(request): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<VideoResponse>), HttpAppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()).into());
    }

    let video = state
        .videos
        .create(NewVideo {
            owner_id: auth.user_id,
            title: request.title,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(video.into())))
}

pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
) -> Result<Json<Vec<VideoResponse>>, HttpAppError> {
    let videos = state.videos.list_by_owner(auth.user_id).await?;
    Ok(Json(videos.into_iter().map(Into::into).collect()))
}

pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    _auth: AuthContext,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;

    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    Ok(Json(video.into()))
}

pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    auth: AuthContext,
) -> Result<StatusCode, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;

    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.owner_id != auth.user_id {
        return Err(AppError::Unauthorized("Unauthorized".to_string()).into());
    }

    // Best-effort removal of the stored artifact; the record goes regardless.
    if let Some(url) = &video.video_url {
        let base = format!("{}/", state.config.distribution_base_url);
        if let Some(key) = url.strip_prefix(&base) {
            if let Err(err) = state.storage.delete(key).await {
                tracing::warn!(
                    video_id = %video_id,
                    key = %key,
                    error = %err,
                    "Failed to delete stored object for video"
                );
            }
        }
    }

    state.videos.delete(video_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
