//! Shared key generation for storage backends.
//!
//! Key format: `{folder}/{epoch_millis}/{filename}`, where `folder` is the
//! owning post's id rendered as a string.

use chrono::Utc;

/// Generate a storage key for a blob attached to a post.
///
/// Collision-resistant at millisecond granularity but not collision-free:
/// two uploads for the same post with the same filename within the same
/// millisecond produce the same key and the later blob silently overwrites
/// the earlier one.
pub fn generate_post_key(folder: &str, filename: &str) -> String {
    format!("{}/{}/{}", folder, Utc::now().timestamp_millis(), filename)
}
