//! Application-wide constants.

/// Multipart field name carrying the video payload.
pub const VIDEO_FIELD_NAME: &str = "video";

/// Default maximum accepted upload size in bytes (1 GiB).
pub const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 1 << 30;

/// Default content-type allow-list for the upload endpoint.
///
/// `image/png` is inherited policy from the thumbnail feature this service
/// grew out of; the list is configurable via `VIDEO_ALLOWED_CONTENT_TYPES`.
pub const DEFAULT_ALLOWED_CONTENT_TYPES: &[&str] = &["video/mp4", "image/png"];

/// Number of random bytes in a storage-key token. Encoded URL-safe without
/// padding this yields a 22-character token.
pub const KEY_TOKEN_BYTES: usize = 16;
