//! Resource orchestrator
//!
//! Sequences the attachment pipeline for one upload:
//! validate → (transform)? → key → blob write → metadata write → attach.
//!
//! There is no compensation, retry, or rollback anywhere in this service;
//! every failure is surfaced to the caller immediately. The operation
//! ordering is deliberate: blob writes happen before metadata commits (a
//! metadata failure can leave an orphaned blob, never a dangling reference)
//! and blob deletes happen before metadata deletes (a metadata failure can
//! leave a dangling record, never an unreferenced row removal).

use std::sync::Arc;

use postmedia_core::{AppError, Post, Resource, ResourceDto, ResourceType, UploadPayload};
use postmedia_db::ResourceRepository;
use postmedia_processing::{ImageResizer, ResourceValidator};
use postmedia_storage::{generate_post_key, ObjectMetadata, Storage};
use uuid::Uuid;

/// Content-encoding tag written with transformed image blobs.
const IMAGE_CONTENT_ENCODING: &str = "utf-8";

/// Media resource orchestrator
pub struct ResourceService {
    storage: Arc<dyn Storage>,
    repository: Arc<dyn ResourceRepository>,
    validator: ResourceValidator,
    resizer: ImageResizer,
}

impl ResourceService {
    pub fn new(
        storage: Arc<dyn Storage>,
        repository: Arc<dyn ResourceRepository>,
        validator: ResourceValidator,
        resizer: ImageResizer,
    ) -> Self {
        Self {
            storage,
            repository,
            validator,
            resizer,
        }
    }

    /// Attach an image to a post.
    ///
    /// The payload is resized/recompressed before storage and the stored
    /// resource's `size` reflects the transformed stream. The resource is
    /// appended to `post.resources` in memory only; committing the post (and
    /// with it the resource record) is the caller's responsibility. A blob
    /// written here is not compensated if a later step fails.
    pub async fn attach_image(
        &self,
        payload: UploadPayload,
        post: &mut Post,
    ) -> Result<Resource, AppError> {
        // 1. Validate size against the image ceiling (no I/O before this).
        self.validator.validate_image_size(payload.len())?;

        // 2. Transform. Decode/encode is CPU-bound; run off the async pool.
        let resizer = self.resizer.clone();
        let data = payload.data.clone();
        let content_type = payload.content_type.clone();
        let transformed = tokio::task::spawn_blocking(move || resizer.resize(&data, &content_type))
            .await
            .map_err(|e| AppError::Internal(format!("image transform task failed: {}", e)))??;

        // 3. Generate the storage key under the owning post's folder.
        let key = generate_post_key(&post.id.to_string(), &payload.filename);

        // 4. Write the transformed bytes; content-length comes from the
        //    transformed stream, not the original upload.
        let metadata = ObjectMetadata {
            content_type: payload.content_type.clone(),
            content_length: transformed.len() as u64,
            content_encoding: Some(IMAGE_CONTENT_ENCODING.to_string()),
        };
        self.storage.put(&key, transformed.to_vec(), &metadata).await?;

        tracing::info!(
            file = %payload.filename,
            key = %key,
            size_bytes = transformed.len(),
            "File uploaded to object storage"
        );

        // 5. Build the record and attach it to the post aggregate in memory.
        let resource = Resource::new(
            key,
            payload.filename,
            transformed.len() as i64,
            ResourceType::Image,
            post.id,
        );
        post.resources.push(resource.clone());

        Ok(resource)
    }

    /// Attach an audio or video file to a post.
    ///
    /// Unlike the image path, the original bytes are stored untransformed and
    /// the metadata record is committed here. The blob write happens-before
    /// the metadata commit: if the commit fails the blob stays behind as an
    /// orphan, trading storage tidiness for referential integrity.
    pub async fn attach_media(
        &self,
        payload: UploadPayload,
        post: &mut Post,
    ) -> Result<ResourceDto, AppError> {
        let declared_len = payload.len();

        // 1. Validate size against the audio/video ceiling.
        self.validator.validate_media_size(declared_len)?;

        // 2. Validate the declared category; anything but audio/video is rejected.
        let resource_type = self.validator.validate_media_category(&payload.content_type)?;

        // 3. Generate the storage key under the owning post's folder.
        let key = generate_post_key(&post.id.to_string(), &payload.filename);

        // 4. Write the original bytes with the declared content-type and length.
        let metadata = ObjectMetadata {
            content_type: payload.content_type.clone(),
            content_length: declared_len as u64,
            content_encoding: None,
        };
        self.storage
            .put(&key, payload.data.to_vec(), &metadata)
            .await?;

        tracing::info!(key = %key, size_bytes = declared_len, "File attached to post");

        // 5. Persist the metadata record; the repository assigns the id.
        let resource = Resource::new(
            key,
            payload.filename,
            declared_len as i64,
            resource_type,
            post.id,
        );
        let persisted = self.repository.save(&resource).await?;

        tracing::info!(
            resource_id = ?persisted.id,
            key = %persisted.key,
            "Resource saved to database"
        );

        // 6. Associate with the post and return the external representation.
        let dto = ResourceDto::from(&persisted);
        post.resources.push(persisted);

        Ok(dto)
    }

    /// Delete a resource: blob first, then the metadata record.
    ///
    /// A storage failure blocks the whole delete and leaves the metadata
    /// intact; a metadata failure after a successful blob delete leaves a
    /// dangling record pointing at a missing blob.
    pub async fn delete_resource(&self, resource_id: Uuid) -> Result<(), AppError> {
        // 1. Look up the record; unknown ids fail before any store call.
        let resource = self
            .repository
            .find_by_id(resource_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resource {} not found", resource_id)))?;

        // 2. Delete the blob.
        self.storage.delete(&resource.key).await?;
        tracing::info!(key = %resource.key, "File deleted from object storage");

        // 3. Delete the metadata record.
        self.repository.delete(&resource).await?;
        tracing::info!(key = %resource.key, "Resource deleted from database");

        Ok(())
    }
}
