//! Shared constants for the thumbnail pipeline.

/// Target thumbnail width in pixels.
pub const THUMBNAIL_WIDTH: u32 = 100;

/// Target thumbnail height in pixels.
pub const THUMBNAIL_HEIGHT: u32 = 100;

/// Key prefix under which thumbnails are stored in the target bucket.
pub const DESTINATION_PREFIX: &str = "thumbnails/";

/// Filename prefix for the staged thumbnail inside the scratch directory.
pub const SCRATCH_THUMBNAIL_PREFIX: &str = "thumbnail-";

/// Outcome message used when the storage backend reports no status text.
pub const DEFAULT_UPLOAD_MESSAGE: &str = "Thumbnail upload is finished.";
