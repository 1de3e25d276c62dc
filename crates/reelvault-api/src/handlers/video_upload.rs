//! Video upload pipeline.
//!
//! Stages the uploaded file to local temporary storage, rewrites it for
//! progressive playback, classifies it by aspect ratio, streams the result to
//! object storage under an orientation-derived key, and records the public
//! URL on the video record. Steps run strictly in sequence; the first failure
//! produces the terminal response and nothing is retried. Both temporary
//! files are removed on every exit path.

use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::handlers::parse_video_id;
use crate::state::AppState;
use crate::upload;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use reelvault_core::constants::VIDEO_FIELD_NAME;
use reelvault_core::models::VideoResponse;
use reelvault_core::AppError;
use reelvault_processing::faststart_output_path;
use reelvault_storage::object_key;
use std::sync::Arc;
use tempfile::TempPath;

pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    auth: AuthContext,
    mut multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;

    let mut video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    // Ownership is checked before a single byte is staged; the response does
    // not reveal who the record belongs to.
    if video.owner_id != auth.user_id {
        return Err(AppError::Unauthorized("Unauthorized".to_string()).into());
    }

    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart body: {}", e)))?;

        let Some(field) = field else {
            return Err(AppError::InvalidInput(format!(
                "No file field named '{}'",
                VIDEO_FIELD_NAME
            ))
            .into());
        };

        if field.name() != Some(VIDEO_FIELD_NAME) {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        upload::validate_content_type(&content_type, &state.config.allowed_content_types)?;

        // Staged bytes live in a scoped temp file that is removed on drop.
        let staged = upload::stage_to_temp_file(field, state.config.max_upload_size_bytes).await?;

        // The normalizer leaves partial output behind on failure; it is our
        // job to sweep it up.
        let normalized = match state.processor.normalize_faststart(staged.path()).await {
            Ok(path) => TempPath::from_path(path),
            Err(err) => {
                remove_partial_output(staged.path()).await;
                return Err(AppError::from(err).into());
            }
        };

        // Orientation comes from the original upload, not the rewritten file.
        let orientation = state
            .processor
            .probe_orientation(staged.path())
            .await
            .map_err(AppError::from)?;

        let key = object_key(orientation, upload::extension_for(&content_type));

        let file = tokio::fs::File::open(&normalized)
            .await
            .map_err(AppError::from)?;
        let content_length = file.metadata().await.map_err(AppError::from)?.len();

        state
            .storage
            .put_object(&key, &content_type, Some(content_length), Box::pin(file))
            .await
            .map_err(AppError::from)?;

        video.video_url = Some(format!("{}/{}", state.config.distribution_base_url, key));
        let updated = state.videos.update(&video).await?;

        tracing::info!(
            video_id = %updated.id,
            key = %key,
            orientation = %orientation,
            content_type = %content_type,
            size_bytes = content_length,
            "Video upload completed"
        );

        return Ok(Json(updated.into()));
    }
}

/// Remove whatever the failed normalizer left at its output path.
async fn remove_partial_output(staged: &std::path::Path) {
    let partial = faststart_output_path(staged);
    if let Err(err) = tokio::fs::remove_file(&partial).await {
        if err.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(
                path = %partial.display(),
                error = %err,
                "Failed to remove partial fast-start output"
            );
        }
    }
}
