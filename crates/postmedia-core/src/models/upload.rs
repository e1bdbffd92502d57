use bytes::Bytes;

/// One uploaded file as received from the transport layer.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    /// Original filename, display-only; never used to derive the category.
    pub filename: String,
    /// Declared content-type, e.g. `image/png`.
    pub content_type: String,
    pub data: Bytes,
}

impl UploadPayload {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        UploadPayload {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Declared length of the upload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
