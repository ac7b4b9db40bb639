//! Thumbnail generation.
//!
//! Resize policy: scale to fit within the target bounds preserving aspect
//! ratio, never upscale. A source already within bounds is re-encoded
//! unchanged. Output keeps the detected source format.

use bytes::Bytes;
use image::{GenericImageView, ImageReader};
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Image decode failed: {0}")]
    Decode(String),

    #[error("Image encode failed: {0}")]
    Encode(String),

    #[error("Unrecognized image format")]
    UnknownFormat,
}

/// Resize capability: bytes + target dimensions -> resized bytes.
pub trait Thumbnailer: Send + Sync {
    fn thumbnail(&self, data: &[u8], width: u32, height: u32) -> Result<Bytes, ThumbnailError>;
}

/// `image`-crate backed thumbnailer.
pub struct ImageThumbnailer;

impl Thumbnailer for ImageThumbnailer {
    fn thumbnail(&self, data: &[u8], width: u32, height: u32) -> Result<Bytes, ThumbnailError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ThumbnailError::Decode(e.to_string()))?;
        let format = reader.format().ok_or(ThumbnailError::UnknownFormat)?;
        let img = reader
            .decode()
            .map_err(|e| ThumbnailError::Decode(e.to_string()))?;

        let (source_width, source_height) = img.dimensions();
        let resized = if source_width <= width && source_height <= height {
            img
        } else {
            img.thumbnail(width, height)
        };

        let (out_width, out_height) = resized.dimensions();
        let estimated_size = (out_width * out_height * 3) as usize;
        let mut buffer = Vec::with_capacity(estimated_size);
        resized
            .write_to(&mut Cursor::new(&mut buffer), format)
            .map_err(|e| ThumbnailError::Encode(e.to_string()))?;

        tracing::debug!(
            source_width,
            source_height,
            out_width,
            out_height,
            format = ?format,
            "Generated thumbnail"
        );

        Ok(Bytes::from(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn create_test_image(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        buffer
    }

    fn decoded_dimensions(data: &[u8]) -> (u32, u32) {
        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        img.dimensions()
    }

    #[test]
    fn shrinks_large_image_within_bounds() {
        let data = create_test_image(200, 100);
        let out = ImageThumbnailer.thumbnail(&data, 100, 100).unwrap();

        assert_eq!(decoded_dimensions(&out), (100, 50));
    }

    #[test]
    fn does_not_upscale_tiny_image() {
        let data = create_test_image(1, 1);
        let out = ImageThumbnailer.thumbnail(&data, 100, 100).unwrap();

        let (w, h) = decoded_dimensions(&out);
        assert_eq!((w, h), (1, 1));
        assert!(w <= 100 && h <= 100);
    }

    #[test]
    fn preserves_source_format() {
        let data = create_test_image(300, 300);
        let out = ImageThumbnailer.thumbnail(&data, 100, 100).unwrap();

        let reader = ImageReader::new(Cursor::new(out.as_ref()))
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Png));
    }

    #[test]
    fn tall_image_is_bounded_by_height() {
        let data = create_test_image(100, 300);
        let out = ImageThumbnailer.thumbnail(&data, 100, 100).unwrap();

        let (w, h) = decoded_dimensions(&out);
        assert_eq!(h, 100);
        assert!(w <= 100);
    }

    #[test]
    fn rejects_undecodable_bytes() {
        let result = ImageThumbnailer.thumbnail(b"not an image", 100, 100);
        assert!(result.is_err());
    }
}
