//! Reelvault API Library
//!
//! This crate provides the HTTP handlers, auth middleware, and application
//! setup for the upload service.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod upload;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
