//! Storage abstraction trait
//!
//! This module defines the Storage trait that all blob storage backends must
//! implement.

use async_trait::async_trait;
use postmedia_core::{AppError, StorageBackend};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object metadata written alongside a blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub content_type: String,
    /// Byte length of the payload actually stored. For transformed images
    /// this is the length of the transformed stream, not the original upload.
    pub content_length: u64,
    pub content_encoding: Option<String>,
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// The attachment pipeline works against it without coupling to backend
/// details. Backends must be safe for concurrent use.
///
/// **Key format:** `{post_id}/{epoch_millis}/{filename}`, produced by the
/// `keys` module.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a blob under the given key, overwriting any existing object.
    async fn put(&self, key: &str, data: Vec<u8>, metadata: &ObjectMetadata) -> StorageResult<()>;

    /// Delete the blob stored under the given key.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
