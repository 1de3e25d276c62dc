//! Video record CRUD integration tests.
//!
//! Run with: `cargo test -p reelvault-api --test videos_test`

mod helpers;

use helpers::{auth_header, seed_video, setup_test_app};
use reelvault_core::models::VideoResponse;
use reelvault_db::VideoStore;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn health_endpoint_needs_no_auth() {
    let app = setup_test_app();

    let response = app.server.get("/healthz").await;

    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn api_routes_require_auth() {
    let app = setup_test_app();

    let response = app.server.get("/api/videos").await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn create_and_fetch_video_record() {
    let app = setup_test_app();
    let owner = Uuid::new_v4();

    let response = app
        .server
        .post("/api/videos")
        .add_header("Authorization", auth_header(owner))
        .json(&json!({ "title": "Boots and cats", "description": "A beat" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let created: VideoResponse = response.json();
    assert_eq!(created.owner_id, owner);
    assert_eq!(created.title, "Boots and cats");
    assert!(created.video_url.is_none());

    let response = app
        .server
        .get(&format!("/api/videos/{}", created.id))
        .add_header("Authorization", auth_header(owner))
        .await;

    assert_eq!(response.status_code(), 200);
    let fetched: VideoResponse = response.json();
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn create_rejects_blank_title() {
    let app = setup_test_app();
    let owner = Uuid::new_v4();

    let response = app
        .server
        .post("/api/videos")
        .add_header("Authorization", auth_header(owner))
        .json(&json!({ "title": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn list_returns_only_own_records() {
    let app = setup_test_app();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    seed_video(&app, alice).await;
    seed_video(&app, alice).await;
    seed_video(&app, bob).await;

    let response = app
        .server
        .get("/api/videos")
        .add_header("Authorization", auth_header(alice))
        .await;

    assert_eq!(response.status_code(), 200);
    let videos: Vec<VideoResponse> = response.json();
    assert_eq!(videos.len(), 2);
    assert!(videos.iter().all(|v| v.owner_id == alice));
}

#[tokio::test]
async fn get_unknown_record_is_not_found() {
    let app = setup_test_app();
    let owner = Uuid::new_v4();

    let response = app
        .server
        .get(&format!("/api/videos/{}", Uuid::new_v4()))
        .add_header("Authorization", auth_header(owner))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn delete_removes_record() {
    let app = setup_test_app();
    let owner = Uuid::new_v4();
    let video = seed_video(&app, owner).await;

    let response = app
        .server
        .delete(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", auth_header(owner))
        .await;

    assert_eq!(response.status_code(), 204);

    let response = app
        .server
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", auth_header(owner))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn delete_rejects_non_owner() {
    let app = setup_test_app();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let video = seed_video(&app, owner).await;

    let response = app
        .server
        .delete(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", auth_header(intruder))
        .await;

    assert_eq!(response.status_code(), 401);
    assert!(app.videos.get(video.id).await.unwrap().is_some());
}
