use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::StoreError;

/// Post store - the storage collaborator the HTTP gateway delegates to.
///
/// The store owns the canonical collection of posts; handlers never hold
/// post state across requests.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Return up to `limit` posts, oldest first.
    async fn list(&self, limit: usize) -> Result<Vec<Post>, StoreError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Persist a new post, assigning its id and default timestamp.
    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// Apply the supplied fields to the matching post.
    /// Returns `None` when no post matches `id`.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, StoreError>;

    /// Delete the matching post. Reports whether anything matched.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
