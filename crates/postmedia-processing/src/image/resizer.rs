//! Image resizer
//!
//! Decodes an uploaded image, downscales it to fit a configured bounding box,
//! and re-encodes it in the same format family. The output byte stream is
//! what gets stored, so callers must derive content-length metadata from it
//! rather than from the original upload.

use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use postmedia_core::AppError;
use std::io::Cursor;

/// Image transform errors
#[derive(Debug, thiserror::Error)]
pub enum ImageProcessingError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Failed to read image data: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ImageProcessingError> for AppError {
    fn from(err: ImageProcessingError) -> Self {
        AppError::ImageProcessing(err.to_string())
    }
}

/// Bounding box the stored image must fit within. Images already inside the
/// box are recompressed but never upscaled.
#[derive(Debug, Clone, Copy)]
pub struct ResizePolicy {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        ResizePolicy {
            max_width: 1080,
            max_height: 1080,
        }
    }
}

/// Image resizer with a fixed target policy
#[derive(Debug, Clone, Default)]
pub struct ImageResizer {
    policy: ResizePolicy,
}

impl ImageResizer {
    pub fn new(policy: ResizePolicy) -> Self {
        Self { policy }
    }

    /// Decode, downscale to the policy bounding box, and re-encode.
    ///
    /// The output format is derived from the declared content-type so the
    /// stored object stays in the same format family as the upload.
    pub fn resize(&self, data: &[u8], content_type: &str) -> Result<Bytes, ImageProcessingError> {
        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .decode()
            .map_err(ImageProcessingError::Decode)?;

        let (width, height) = img.dimensions();
        let img = if width > self.policy.max_width || height > self.policy.max_height {
            tracing::debug!(
                width,
                height,
                max_width = self.policy.max_width,
                max_height = self.policy.max_height,
                "Downscaling image to fit resize policy"
            );
            img.resize(
                self.policy.max_width,
                self.policy.max_height,
                FilterType::Lanczos3,
            )
        } else {
            img
        };

        let format = Self::detect_format(content_type);
        // JPEG cannot encode an alpha channel; flatten to RGB first.
        let img = match format {
            ImageFormat::Jpeg if img.color().has_alpha() => DynamicImage::ImageRgb8(img.to_rgb8()),
            _ => img,
        };

        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), format)
            .map_err(ImageProcessingError::Encode)?;

        Ok(Bytes::from(buffer))
    }

    /// Detect output format from the declared content-type.
    pub fn detect_format(content_type: &str) -> ImageFormat {
        match content_type.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => ImageFormat::Jpeg,
            "image/png" => ImageFormat::Png,
            "image/gif" => ImageFormat::Gif,
            "image/webp" => ImageFormat::WebP,
            _ => ImageFormat::Jpeg,
        }
    }
}
