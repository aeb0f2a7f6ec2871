//! BSON document mapping for posts.

use serde::{Deserialize, Serialize};

use quill_core::domain::Post;

/// One document per post, stored in a single collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: bson::Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: bson::DateTime,
}

/// Conversion from stored document to domain Post.
impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        Self {
            id: doc.id.to_uuid_1(),
            title: doc.title,
            content: doc.content,
            author: doc.author,
            created_at: doc.created_at.to_chrono(),
        }
    }
}

/// Conversion from domain Post to its stored document.
impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            id: bson::Uuid::from_uuid_1(post.id),
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: bson::DateTime::from_chrono(post.created_at),
        }
    }
}
