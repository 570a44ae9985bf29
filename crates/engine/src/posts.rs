//! Saved-post records and the caller-owned log that holds them.
//!
//! The engine persists nothing. [`SavedPost`] is the structured record the
//! caller stores however it likes; [`PostLog`] is the ordered, newest-first
//! log it appends to. Entries are added and removed, never edited in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// One saved post, as handed to the caller's storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPost {
    pub id: Uuid,
    pub text: String,
    pub saved_at: DateTime<Utc>,
}

/// Ordered log of saved posts, newest first.
#[derive(Debug, Clone, Default)]
pub struct PostLog {
    posts: Vec<SavedPost>,
}

impl PostLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a post at the front of the log and returns the stored record.
    pub fn save(&mut self, text: impl Into<String>) -> &SavedPost {
        let post = SavedPost {
            id: Uuid::new_v4(),
            text: text.into(),
            saved_at: Utc::now(),
        };
        debug!(id = %post.id, "saved post");
        self.posts.insert(0, post);
        &self.posts[0]
    }

    /// Removes the post with the given id. Returns false when no entry
    /// matched.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| post.id != id);
        self.posts.len() != before
    }

    pub fn posts(&self) -> &[SavedPost] {
        &self.posts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedPost> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
