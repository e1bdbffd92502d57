//! Configuration module
//!
//! Environment-driven configuration for the media attachment subsystem:
//! storage backend selection, size ceilings, and the image resize policy.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const DEFAULT_MAX_IMAGE_SIZE_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_MAX_MEDIA_SIZE_BYTES: usize = 100 * 1024 * 1024;
const DEFAULT_IMAGE_MAX_DIMENSION: u32 = 1080;

/// Media attachment configuration
#[derive(Clone, Debug)]
pub struct MediaConfig {
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    // Validation ceilings (images and audio/video are configured independently)
    pub max_image_size_bytes: usize,
    pub max_media_size_bytes: usize,
    // Image resize policy: stored images are downscaled to fit this bounding box
    pub image_max_dimension: u32,
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl MediaConfig {
    /// Load configuration from environment variables, applying defaults for
    /// unset values.
    pub fn from_env() -> Self {
        MediaConfig {
            storage_backend: env_opt("STORAGE_BACKEND").and_then(|v| v.parse().ok()),
            s3_bucket: env_opt("S3_BUCKET"),
            s3_region: env_opt("S3_REGION"),
            s3_endpoint: env_opt("S3_ENDPOINT"),
            aws_region: env_opt("AWS_REGION"),
            local_storage_path: env_opt("LOCAL_STORAGE_PATH"),
            max_image_size_bytes: env_parse("MAX_IMAGE_SIZE_BYTES", DEFAULT_MAX_IMAGE_SIZE_BYTES),
            max_media_size_bytes: env_parse("MAX_MEDIA_SIZE_BYTES", DEFAULT_MAX_MEDIA_SIZE_BYTES),
            image_max_dimension: env_parse("IMAGE_MAX_DIMENSION", DEFAULT_IMAGE_MAX_DIMENSION),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        MediaConfig {
            storage_backend: None,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            aws_region: None,
            local_storage_path: None,
            max_image_size_bytes: DEFAULT_MAX_IMAGE_SIZE_BYTES,
            max_media_size_bytes: DEFAULT_MAX_MEDIA_SIZE_BYTES,
            image_max_dimension: DEFAULT_IMAGE_MAX_DIMENSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceilings() {
        let config = MediaConfig::default();
        assert_eq!(config.max_image_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.max_media_size_bytes, 100 * 1024 * 1024);
        assert_eq!(config.image_max_dimension, 1080);
        assert!(config.storage_backend.is_none());
    }
}
