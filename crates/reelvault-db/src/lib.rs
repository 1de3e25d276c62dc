//! Reelvault Database Library
//!
//! Postgres-backed metadata store for video records: the `VideoStore` trait
//! and its sqlx implementation.

mod video_store;
mod videos;

pub use video_store::{NewVideo, VideoStore};
pub use videos::VideoRepository;
