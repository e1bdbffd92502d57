//! Domain models for the media attachment subsystem.

pub mod post;
pub mod resource;
pub mod upload;

pub use post::Post;
pub use resource::{Resource, ResourceDto, ResourceType};
pub use upload::UploadPayload;
