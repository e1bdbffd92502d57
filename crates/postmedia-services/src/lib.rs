//! Postmedia Services Library
//!
//! The resource orchestrator: sequences validation, transformation, key
//! generation, blob writes, and metadata persistence for media attached to
//! posts.

pub mod resource_service;

pub use resource_service::ResourceService;
