//! Image transform pipeline: decode, bounded downscale, re-encode.

pub mod resizer;

pub use resizer::{ImageProcessingError, ImageResizer, ResizePolicy};
