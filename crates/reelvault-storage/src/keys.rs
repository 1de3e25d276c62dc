//! Storage-key derivation.
//!
//! Keys are `{prefix}/{token}.{ext}` where the prefix comes from the video's
//! orientation and the token is random. Uniqueness is probabilistic: 128 bits
//! of entropy makes collisions negligible, so keys are never checked against
//! existing objects before a write.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::Rng;
use reelvault_core::constants::KEY_TOKEN_BYTES;
use reelvault_core::models::Orientation;

/// Derive a fresh storage key for an object of the given orientation and
/// file extension.
pub fn object_key(orientation: Orientation, ext: &str) -> String {
    let mut raw = [0u8; KEY_TOKEN_BYTES];
    rand::rng().fill(&mut raw[..]);
    format!(
        "{}/{}.{}",
        orientation.storage_prefix(),
        URL_SAFE_NO_PAD.encode(raw),
        ext
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_prefix_follows_orientation() {
        assert!(object_key(Orientation::SixteenNine, "mp4").starts_with("landscape/"));
        assert!(object_key(Orientation::NineSixteen, "mp4").starts_with("portrait/"));
        assert!(object_key(Orientation::Other, "mp4").starts_with("other/"));
    }

    #[test]
    fn key_token_is_fixed_length_url_safe() {
        let key = object_key(Orientation::SixteenNine, "mp4");
        let rest = key.strip_prefix("landscape/").unwrap();
        let token = rest.strip_suffix(".mp4").unwrap();
        // 16 random bytes encode to 22 chars without padding
        assert_eq!(token.len(), 22);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn keys_do_not_repeat() {
        let a = object_key(Orientation::Other, "mp4");
        let b = object_key(Orientation::Other, "mp4");
        assert_ne!(a, b);
    }

    #[test]
    fn key_carries_extension() {
        assert!(object_key(Orientation::Other, "png").ends_with(".png"));
    }
}
