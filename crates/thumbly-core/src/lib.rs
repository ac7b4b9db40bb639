//! Thumbly Core Library
//!
//! This crate provides the domain models, configuration, and shared constants
//! used by the other thumbly components.

pub mod config;
pub mod constants;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use models::{BatchResponse, Notification, UploadOutcome};
pub use storage_types::StorageBackend;
