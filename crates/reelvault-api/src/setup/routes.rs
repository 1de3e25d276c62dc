//! Route table assembly.

use crate::auth::middleware::auth_middleware;
use crate::handlers::video_upload::upload_video;
use crate::handlers::videos::{create_video, delete_video, get_video, list_videos};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Slack on top of the configured maximum upload size to account for
/// multipart framing.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the application router. Everything under `/api` requires a valid
/// bearer token; the health endpoint does not.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state
        .config
        .max_upload_size_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let api = Router::new()
        .route("/videos", post(create_video).get(list_videos))
        .route("/videos/{video_id}", get(get_video).delete(delete_video))
        .route(
            "/videos/{video_id}/upload",
            post(upload_video).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/healthz", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
