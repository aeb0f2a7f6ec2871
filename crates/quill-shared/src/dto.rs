//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_core::domain::Post;

/// Request body to create a post.
///
/// Key presence for the required fields is checked against the raw body
/// before this type is deserialized; see the post handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default, alias = "createdAt")]
    pub publish_date: Option<DateTime<Utc>>,
}

/// Request body for a partial update - only supplied fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "publishDate")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for a full replace, addressed by a body id that must match
/// the path id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePostRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

/// A post's public representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

/// Envelope for list responses - never a bare array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub blogposts: Vec<PostResponse>,
}
