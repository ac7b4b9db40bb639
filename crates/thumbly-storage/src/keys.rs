//! Destination key derivation.
//!
//! Thumbnails are stored under `thumbnails/{source_key}` in the target bucket.
//! The source key is used verbatim, path separators included; no decoding or
//! normalization is applied.

use thumbly_core::constants::DESTINATION_PREFIX;

/// Derive the target-bucket key for a source object's thumbnail.
pub fn thumbnail_key(source_key: &str) -> String {
    format!("{}{}", DESTINATION_PREFIX, source_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_plain_key() {
        assert_eq!(thumbnail_key("cat.png"), "thumbnails/cat.png");
    }

    #[test]
    fn preserves_nested_path() {
        assert_eq!(
            thumbnail_key("images/a/b.png"),
            "thumbnails/images/a/b.png"
        );
    }

    #[test]
    fn does_not_normalize() {
        assert_eq!(thumbnail_key("a/./b.png"), "thumbnails/a/./b.png");
        assert_eq!(thumbnail_key("sp%20ace.png"), "thumbnails/sp%20ace.png");
    }
}
