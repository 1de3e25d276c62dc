//! Test helpers: build the router against in-memory fakes.
//!
//! Run with `cargo test -p reelvault-api`. No external services are needed;
//! the metadata store, object storage, and media processor are all faked.

#![allow(dead_code)]

pub mod fakes;

use axum_test::TestServer;
use self::fakes::{FakeProcessor, InMemoryVideoStore, MemoryStorage};
use reelvault_api::auth::issue_jwt;
use reelvault_api::setup::routes::build_router;
use reelvault_api::state::AppState;
use reelvault_core::models::Video;
use reelvault_core::{Config, StorageBackend};
use reelvault_db::{NewVideo, VideoStore};
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-test-secret-test-secret!";
pub const TEST_DISTRIBUTION_BASE: &str = "https://cdn.reelvault.test";
pub const TEST_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Test application: server plus handles on the injected fakes.
pub struct TestApp {
    pub server: TestServer,
    pub videos: Arc<InMemoryVideoStore>,
    pub storage: Arc<MemoryStorage>,
    pub processor: Arc<FakeProcessor>,
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        database_url: "postgresql://unused".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 5,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiry_hours: 24,
        storage_backend: StorageBackend::Local,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: Some("/tmp/reelvault-test".to_string()),
        distribution_base_url: TEST_DISTRIBUTION_BASE.to_string(),
        max_upload_size_bytes: TEST_MAX_UPLOAD_BYTES,
        allowed_content_types: vec!["video/mp4".to_string(), "image/png".to_string()],
        ffmpeg_path: "ffmpeg".to_string(),
        ffprobe_path: "ffprobe".to_string(),
        environment: "test".to_string(),
    }
}

/// Build a test app around the given fake processor.
pub fn setup_test_app_with(processor: FakeProcessor) -> TestApp {
    let videos = Arc::new(InMemoryVideoStore::new());
    let storage = Arc::new(MemoryStorage::new());
    let processor = Arc::new(processor);

    let state = Arc::new(AppState::new(
        test_config(),
        videos.clone(),
        storage.clone(),
        processor.clone(),
    ));

    let server = TestServer::new(build_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        videos,
        storage,
        processor,
    }
}

/// Test app with a processor that classifies everything as 16:9.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(FakeProcessor::landscape())
}

/// Authorization header value for a principal.
pub fn auth_header(user_id: Uuid) -> String {
    let token = issue_jwt(user_id, TEST_JWT_SECRET, 24).expect("Failed to issue test token");
    format!("Bearer {}", token)
}

/// Seed a video record owned by `owner_id`.
pub async fn seed_video(app: &TestApp, owner_id: Uuid) -> Video {
    app.videos
        .create(NewVideo {
            owner_id,
            title: "Test clip".to_string(),
            description: None,
        })
        .await
        .expect("Failed to seed video record")
}
