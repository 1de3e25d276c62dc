//! Storage abstraction trait
//!
//! All storage backends (S3, local filesystem) implement this trait so the
//! upload pipeline works with any backend without coupling to implementation
//! details. Public playback URLs are composed by the caller from the
//! configured distribution base, never by a backend.

use async_trait::async_trait;
use reelvault_core::StorageBackend;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for reelvault_core::AppError {
    fn from(err: StorageError) -> Self {
        reelvault_core::AppError::Storage(err.to_string())
    }
}

/// Storage abstraction trait
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write an object under `key`, tagged with `content_type`, reading the
    /// payload from `reader` until EOF.
    ///
    /// `content_length` is the expected payload size; backends may use it for
    /// sizing but must tolerate `None`.
    async fn put_object(
        &self,
        key: &str,
        content_type: &str,
        content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<()>;

    /// Delete an object by key. Deleting an absent object is an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// The backend type of this implementation.
    fn backend_type(&self) -> StorageBackend;
}
