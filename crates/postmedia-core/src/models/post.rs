use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::resource::Resource;

/// Owning content aggregate for attached resources.
///
/// The post itself is owned and persisted outside this subsystem; only its id
/// and its resource collection are relevant here. The attach operations take
/// the post by `&mut`, so mutations of `resources` for a given post instance
/// are serialized by the borrow checker within a process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub resources: Vec<Resource>,
}

impl Post {
    pub fn new(id: Uuid) -> Self {
        Post {
            id,
            resources: Vec::new(),
        }
    }
}
