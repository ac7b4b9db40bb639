//! Thumbly Processing Library
//!
//! Image thumbnail generation for the pipeline. The resize capability is a
//! trait so the pipeline's tests can substitute a deterministic fake.

pub mod thumbnailer;

pub use thumbnailer::{ImageThumbnailer, ThumbnailError, Thumbnailer};
