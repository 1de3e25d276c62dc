//! Shared application state.

use reelvault_core::Config;
use reelvault_db::VideoStore;
use reelvault_processing::VideoProcessor;
use reelvault_storage::Storage;
use std::sync::Arc;

/// Application state shared across request handlers.
///
/// Collaborators are trait objects so tests can swap in fakes; each is
/// individually safe for concurrent use.
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoStore>,
    pub storage: Arc<dyn Storage>,
    pub processor: Arc<dyn VideoProcessor>,
}

impl AppState {
    pub fn new(
        config: Config,
        videos: Arc<dyn VideoStore>,
        storage: Arc<dyn Storage>,
        processor: Arc<dyn VideoProcessor>,
    ) -> Self {
        Self {
            config,
            videos,
            storage,
            processor,
        }
    }
}
