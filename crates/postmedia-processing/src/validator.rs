use postmedia_core::{AppError, ResourceType};

/// Validation errors for uploaded media files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Unsupported content type: {content_type} (expected audio/* or video/*)")]
    UnsupportedContentType { content_type: String },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::FileTooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            ValidationError::UnsupportedContentType { .. } => {
                AppError::UnsupportedMediaType(err.to_string())
            }
        }
    }
}

/// Upload validator
///
/// Pure and side-effect-free: all checks run before any storage or repository
/// I/O. Image and audio/video size ceilings are configured independently.
#[derive(Debug, Clone)]
pub struct ResourceValidator {
    max_image_size_bytes: usize,
    max_media_size_bytes: usize,
}

impl ResourceValidator {
    pub fn new(max_image_size_bytes: usize, max_media_size_bytes: usize) -> Self {
        Self {
            max_image_size_bytes,
            max_media_size_bytes,
        }
    }

    /// Validate an image payload against the image ceiling.
    pub fn validate_image_size(&self, size: usize) -> Result<(), ValidationError> {
        Self::validate_size(size, self.max_image_size_bytes)
    }

    /// Validate an audio/video payload against the media ceiling.
    pub fn validate_media_size(&self, size: usize) -> Result<(), ValidationError> {
        Self::validate_size(size, self.max_media_size_bytes)
    }

    fn validate_size(size: usize, max: usize) -> Result<(), ValidationError> {
        if size > max {
            return Err(ValidationError::FileTooLarge { size, max });
        }
        Ok(())
    }

    /// Validate that the declared content-type's primary segment is audio or
    /// video, returning the resolved category. Anything else is rejected,
    /// including image content-types: images go through the image path.
    pub fn validate_media_category(
        &self,
        content_type: &str,
    ) -> Result<ResourceType, ValidationError> {
        match ResourceType::from_content_type(content_type) {
            Some(ResourceType::Audio) => Ok(ResourceType::Audio),
            Some(ResourceType::Video) => Ok(ResourceType::Video),
            _ => Err(ValidationError::UnsupportedContentType {
                content_type: content_type.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_validator() -> ResourceValidator {
        ResourceValidator::new(5 * 1024 * 1024, 100 * 1024 * 1024)
    }

    #[test]
    fn test_validate_image_size_under_ceiling() {
        let validator = test_validator();
        assert!(validator.validate_image_size(2 * 1024 * 1024).is_ok());
    }

    #[test]
    fn test_validate_image_size_at_ceiling() {
        let validator = test_validator();
        assert!(validator.validate_image_size(5 * 1024 * 1024).is_ok());
    }

    #[test]
    fn test_validate_image_size_over_ceiling() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_image_size(6 * 1024 * 1024),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_media_size_over_ceiling() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_media_size(150 * 1024 * 1024),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_media_category_audio_and_video() {
        let validator = test_validator();
        assert_eq!(
            validator.validate_media_category("video/quicktime").unwrap(),
            ResourceType::Video
        );
        assert_eq!(
            validator.validate_media_category("audio/mpeg").unwrap(),
            ResourceType::Audio
        );
    }

    #[test]
    fn test_validate_media_category_rejects_images() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_media_category("image/png"),
            Err(ValidationError::UnsupportedContentType { .. })
        ));
    }

    #[test]
    fn test_validate_media_category_rejects_unknown() {
        let validator = test_validator();
        assert!(validator.validate_media_category("text/plain").is_err());
        assert!(validator.validate_media_category("").is_err());
    }

    #[test]
    fn test_error_mapping_to_app_error() {
        let too_large: AppError = ValidationError::FileTooLarge { size: 10, max: 5 }.into();
        assert_eq!(too_large.error_type(), "PayloadTooLarge");

        let unsupported: AppError = ValidationError::UnsupportedContentType {
            content_type: "text/plain".to_string(),
        }
        .into();
        assert_eq!(unsupported.error_type(), "UnsupportedMediaType");
    }
}
