//! HTTP request handlers.

pub mod video_upload;
pub mod videos;

use reelvault_core::AppError;
use uuid::Uuid;

/// Parse a path-embedded video identifier.
pub(crate) fn parse_video_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidInput("Invalid video id".to_string()))
}
