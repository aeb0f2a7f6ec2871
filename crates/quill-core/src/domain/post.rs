use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a post.
///
/// The store assigns the id; `created_at` falls back to the current time
/// when the caller does not supply one.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A partial update - only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Materialize a post from its creation payload and a store-assigned id.
    pub fn from_new(id: Uuid, new_post: NewPost) -> Self {
        Self {
            id,
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            created_at: new_post.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Apply a partial update in place. The id is never touched.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
    }
}
