//! In-memory fakes for the pipeline's collaborators.

use async_trait::async_trait;
use chrono::Utc;
use reelvault_core::models::{Orientation, Video};
use reelvault_core::{AppError, StorageBackend};
use reelvault_db::{NewVideo, VideoStore};
use reelvault_processing::{faststart_output_path, ProcessingError, VideoProcessor};
use reelvault_storage::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Mutex;
use tokio::io::AsyncRead;
use uuid::Uuid;

/// Marker the fake normalizer prepends, so tests can prove the rewritten file
/// (not the staged original) is what reaches storage.
pub const FASTSTART_MARKER: &[u8] = b"faststart:";

// ---------------------------------------------------------------------------
// Metadata store
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryVideoStore {
    videos: Mutex<HashMap<Uuid, Video>>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn create(&self, new_video: NewVideo) -> Result<Video, AppError> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            owner_id: new_video.owner_id,
            title: new_video.title,
            description: new_video.description,
            video_url: None,
            created_at: now,
            updated_at: now,
        };
        self.videos
            .lock()
            .unwrap()
            .insert(video.id, video.clone());
        Ok(video)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.videos.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, AppError> {
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(videos)
    }

    async fn update(&self, video: &Video) -> Result<Video, AppError> {
        let mut videos = self.videos.lock().unwrap();
        if !videos.contains_key(&video.id) {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }
        let mut updated = video.clone();
        updated.updated_at = Utc::now();
        videos.insert(updated.id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.videos.lock().unwrap().remove(&id).is_none() {
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Object storage
// ---------------------------------------------------------------------------

/// Storage fake that keeps objects in memory, with accessors for assertions.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, (String, Vec<u8>)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    /// (content_type, data) stored under `key`, if any.
    pub fn get_object(&self, key: &str) -> Option<(String, Vec<u8>)> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put_object(
        &self,
        key: &str,
        content_type: &str,
        _content_length: Option<u64>,
        mut reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<()> {
        let mut data = Vec::new();
        tokio::io::AsyncReadExt::read_to_end(&mut reader, &mut data).await?;
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (content_type.to_string(), data));
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        if self.objects.lock().unwrap().remove(key).is_none() {
            return Err(StorageError::NotFound(key.to_string()));
        }
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

// ---------------------------------------------------------------------------
// Media processor
// ---------------------------------------------------------------------------

/// Processor fake. Records every temporary path it touches so tests can
/// assert the guaranteed-cleanup contract after the request finishes.
pub struct FakeProcessor {
    orientation: Orientation,
    fail_normalize: bool,
    seen_paths: Mutex<Vec<PathBuf>>,
}

impl FakeProcessor {
    pub fn with_orientation(orientation: Orientation) -> Self {
        Self {
            orientation,
            fail_normalize: false,
            seen_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn landscape() -> Self {
        Self::with_orientation(Orientation::SixteenNine)
    }

    /// A processor whose normalize step fails after leaving partial output
    /// behind, like a crashing ffmpeg.
    pub fn failing_normalize() -> Self {
        Self {
            orientation: Orientation::SixteenNine,
            fail_normalize: true,
            seen_paths: Mutex::new(Vec::new()),
        }
    }

    /// Every staged input and normalized output path observed so far.
    pub fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen_paths.lock().unwrap().clone()
    }

    pub fn was_invoked(&self) -> bool {
        !self.seen_paths.lock().unwrap().is_empty()
    }

    fn record(&self, path: &Path) {
        self.seen_paths.lock().unwrap().push(path.to_path_buf());
    }
}

#[async_trait]
impl VideoProcessor for FakeProcessor {
    async fn probe_orientation(&self, path: &Path) -> Result<Orientation, ProcessingError> {
        self.record(path);
        Ok(self.orientation)
    }

    async fn normalize_faststart(&self, path: &Path) -> Result<PathBuf, ProcessingError> {
        self.record(path);

        let output = faststart_output_path(path);
        let staged = tokio::fs::read(path)
            .await
            .map_err(|source| ProcessingError::Spawn {
                tool: "ffmpeg",
                source,
            })?;

        let mut rewritten = FASTSTART_MARKER.to_vec();
        rewritten.extend_from_slice(&staged);
        tokio::fs::write(&output, rewritten)
            .await
            .map_err(|source| ProcessingError::Spawn {
                tool: "ffmpeg",
                source,
            })?;
        self.record(&output);

        if self.fail_normalize {
            // Partial output stays on disk; the caller owns cleanup.
            #[cfg(unix)]
            let status: std::process::ExitStatus =
                std::os::unix::process::ExitStatusExt::from_raw(1 << 8);
            #[cfg(windows)]
            let status: std::process::ExitStatus =
                std::os::windows::process::ExitStatusExt::from_raw(1);
            return Err(ProcessingError::ToolFailed {
                tool: "ffmpeg",
                status,
                stderr: "simulated transcode failure".to_string(),
            });
        }

        Ok(output)
    }
}
