//! Postmedia Storage Library
//!
//! Object storage abstraction for attached media blobs: the `Storage` trait
//! plus S3 and local filesystem backends.
//!
//! # Storage key format
//!
//! Blobs are keyed per owning post: `{post_id}/{epoch_millis}/{filename}`.
//! Keys must not contain `..` or a leading `/`. Key generation is centralized
//! in the `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::generate_post_key;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use postmedia_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{ObjectMetadata, Storage, StorageError, StorageResult};
