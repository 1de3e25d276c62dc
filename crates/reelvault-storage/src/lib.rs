//! Reelvault Storage Library
//!
//! Object-storage abstraction and implementations: the `Storage` trait, an S3
//! backend, a local-filesystem backend, and storage-key derivation.
//!
//! # Storage key format
//!
//! Objects are namespaced by frame orientation:
//! `{landscape|portrait|other}/{token}.{ext}`, where `token` is a 22-character
//! URL-safe random string. Key derivation is centralized in the `keys` module.
//! Keys must not contain `..` or a leading `/`.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::object_key;
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
