//! Postmedia Core Library
//!
//! This crate provides the core domain models, error types, and configuration
//! shared across all postmedia components.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::MediaConfig;
pub use error::AppError;
pub use models::{Post, Resource, ResourceDto, ResourceType, UploadPayload};
pub use storage_types::StorageBackend;
