//! Application setup and initialization
//!
//! All initialization logic lives here rather than in main.rs so tests can
//! assemble the application from parts.

pub mod database;
pub mod routes;
pub mod server;
pub mod telemetry;

use crate::state::AppState;
use anyhow::{Context, Result};
use reelvault_core::Config;
use reelvault_db::{VideoRepository, VideoStore};
use reelvault_processing::{FfmpegVideoProcessor, VideoProcessor};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    telemetry::init_telemetry();
    tracing::info!("Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup storage
    let storage = reelvault_storage::create_storage(&config)
        .await
        .context("Failed to initialize storage backend")?;

    let videos: Arc<dyn VideoStore> = Arc::new(VideoRepository::new(pool));
    let processor: Arc<dyn VideoProcessor> = Arc::new(FfmpegVideoProcessor::new(
        config.ffmpeg_path.clone(),
        config.ffprobe_path.clone(),
    ));

    let state = Arc::new(AppState::new(config, videos, storage, processor));

    // Setup routes
    let router = routes::build_router(state.clone());

    Ok((state, router))
}
