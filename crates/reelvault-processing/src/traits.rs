//! Processing abstraction trait.

use crate::error::ProcessingError;
use async_trait::async_trait;
use reelvault_core::models::Orientation;
use std::path::{Path, PathBuf};

/// Media inspection and normalization operations.
///
/// The production implementation shells out to ffprobe/ffmpeg; tests inject a
/// fake so the upload pipeline can run without the tools installed.
#[async_trait]
pub trait VideoProcessor: Send + Sync {
    /// Inspect the file at `path` and classify its frame orientation.
    /// Read-only; never modifies the input.
    async fn probe_orientation(&self, path: &Path) -> Result<Orientation, ProcessingError>;

    /// Rewrite the container at `path` so its index precedes the payload,
    /// without re-encoding, and return the path of the new file.
    ///
    /// The output coexists with the input. On failure no cleanup of a partial
    /// output is attempted here; the caller owns the produced path's lifecycle
    /// either way.
    async fn normalize_faststart(&self, path: &Path) -> Result<PathBuf, ProcessingError>;
}
