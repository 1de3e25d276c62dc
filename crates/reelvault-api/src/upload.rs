//! Upload validation and staging helpers.

use axum::extract::multipart::Field;
use reelvault_core::AppError;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

/// Normalize a MIME type by stripping parameters
/// (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate a declared content type against the allow-list. Compares the
/// normalized MIME type only, so parameters cannot bypass the gate.
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types
        .iter()
        .any(|ct| normalized == ct.to_lowercase())
    {
        return Err(AppError::UnsupportedMediaType(format!(
            "Unsupported file type. Allowed types: {}",
            allowed_types.join(", ")
        )));
    }
    Ok(())
}

/// File extension for a declared content type.
pub fn extension_for(content_type: &str) -> &str {
    match normalize_mime_type(content_type) {
        "video/mp4" => "mp4",
        "image/png" => "png",
        other => other.rsplit('/').next().unwrap_or("bin"),
    }
}

/// Stream a multipart field into a scoped temporary file.
///
/// The returned handle removes the file when dropped, so the staged bytes are
/// cleaned up on every exit path of the caller. Bytes beyond `max_bytes` abort
/// the transfer. The file is flushed and synced before returning so external
/// tools that reopen the path see the full contents.
pub async fn stage_to_temp_file(
    mut field: Field<'_>,
    max_bytes: usize,
) -> Result<NamedTempFile, AppError> {
    let staged = NamedTempFile::new()?;
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .open(staged.path())
        .await?;

    let mut written: usize = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?
    {
        written += chunk.len();
        if written > max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "File size exceeds maximum allowed size of {} MB",
                max_bytes / 1024 / 1024
            )));
        }
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    file.sync_all().await?;

    Ok(staged)
}
