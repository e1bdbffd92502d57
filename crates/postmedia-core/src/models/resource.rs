use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Resource category, derived once at creation from the primary segment of
/// the declared content-type (`image/png` → `Image`). A content-type that
/// does not resolve to a known category is a validation failure upstream,
/// never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "resource_type", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
    Audio,
}

impl ResourceType {
    /// Derive the category from a declared content-type.
    ///
    /// Only the primary segment is considered, so `video/quicktime` and
    /// `video/mp4` both resolve to `Video`. Unknown categories return `None`.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let primary = content_type
            .split('/')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match primary.as_str() {
            "image" => Some(ResourceType::Image),
            "video" => Some(ResourceType::Video),
            "audio" => Some(ResourceType::Audio),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Audio => "audio",
        }
    }
}

/// Metadata record for one stored media object, linked to exactly one owning
/// post.
///
/// `id` is assigned by the metadata repository on first save and stays `None`
/// for resources that are attached in memory only. `key` addresses the blob
/// in the object store and is immutable once assigned; `size` is the byte
/// length of the *stored* payload, which for images is the transformed
/// stream, not the original upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Resource {
    pub id: Option<Uuid>,
    pub key: String,
    pub name: String,
    pub size: i64,
    pub resource_type: ResourceType,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// Build an unpersisted resource record. The repository assigns `id`.
    pub fn new(
        key: String,
        name: String,
        size: i64,
        resource_type: ResourceType,
        post_id: Uuid,
    ) -> Self {
        Resource {
            id: None,
            key,
            name,
            size,
            resource_type,
            post_id,
            created_at: Utc::now(),
        }
    }

    /// A resource counts as persisted once the repository has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Externally-facing representation of a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDto {
    pub id: Option<Uuid>,
    pub key: String,
    pub name: String,
    pub size: i64,
    pub resource_type: ResourceType,
}

impl From<&Resource> for ResourceDto {
    fn from(resource: &Resource) -> Self {
        ResourceDto {
            id: resource.id,
            key: resource.key.clone(),
            name: resource.name.clone(),
            size: resource.size,
            resource_type: resource.resource_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_type_known_categories() {
        assert_eq!(
            ResourceType::from_content_type("image/png"),
            Some(ResourceType::Image)
        );
        assert_eq!(
            ResourceType::from_content_type("video/quicktime"),
            Some(ResourceType::Video)
        );
        assert_eq!(
            ResourceType::from_content_type("audio/mpeg"),
            Some(ResourceType::Audio)
        );
    }

    #[test]
    fn test_from_content_type_is_case_insensitive() {
        assert_eq!(
            ResourceType::from_content_type("IMAGE/PNG"),
            Some(ResourceType::Image)
        );
    }

    #[test]
    fn test_from_content_type_unknown_category_is_not_defaulted() {
        assert_eq!(ResourceType::from_content_type("text/plain"), None);
        assert_eq!(ResourceType::from_content_type("application/pdf"), None);
        assert_eq!(ResourceType::from_content_type(""), None);
    }

    #[test]
    fn test_new_resource_is_unpersisted() {
        let resource = Resource::new(
            "post/123/photo.png".to_string(),
            "photo.png".to_string(),
            2048,
            ResourceType::Image,
            Uuid::new_v4(),
        );
        assert!(!resource.is_persisted());
        assert!(!resource.key.is_empty());
    }

    #[test]
    fn test_dto_mapping() {
        let resource = Resource::new(
            "p/1/clip.mov".to_string(),
            "clip.mov".to_string(),
            1024,
            ResourceType::Video,
            Uuid::new_v4(),
        );
        let dto = ResourceDto::from(&resource);
        assert_eq!(dto.key, resource.key);
        assert_eq!(dto.size, 1024);
        assert_eq!(dto.resource_type, ResourceType::Video);
    }
}
