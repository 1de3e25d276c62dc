//! Metadata-store trait for video records.
//!
//! Handlers depend on this trait rather than on a concrete repository so the
//! pipeline can run against an in-memory store in tests.

use async_trait::async_trait;
use reelvault_core::models::Video;
use reelvault_core::AppError;
use uuid::Uuid;

/// Fields for creating a new video record.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Insert a new record and return it.
    async fn create(&self, new_video: NewVideo) -> Result<Video, AppError>;

    /// Fetch a record by identifier. Returns `None` if absent.
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// List all records owned by a principal, newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, AppError>;

    /// Persist an updated record and return the stored row.
    ///
    /// Updates are last-writer-wins; there is no optimistic concurrency check.
    async fn update(&self, video: &Video) -> Result<Video, AppError>;

    /// Delete a record by identifier.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}
