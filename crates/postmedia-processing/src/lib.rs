//! Postmedia Processing Library
//!
//! Pure, I/O-free building blocks of the attachment pipeline: size and
//! content-type validation, and the image resize/recompress transform.

pub mod image;
pub mod validator;

pub use crate::image::{ImageProcessingError, ImageResizer, ResizePolicy};
pub use validator::{ResourceValidator, ValidationError};
