//! MongoDB post store - one document per post in a single collection.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

use super::MongoConfig;
use super::document::PostDocument;

/// Post store backed by a MongoDB collection.
pub struct MongoPostStore {
    collection: Collection<PostDocument>,
}

impl MongoPostStore {
    /// Connect to the deployment and verify it is reachable.
    ///
    /// Fails fast with [`StoreError::Connection`] instead of surfacing the
    /// first broken request later.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Document database connected"
        );

        let collection = client
            .database(&config.database)
            .collection(&config.collection);

        Ok(Self { collection })
    }
}

fn query_err(e: mongodb::error::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

/// Build the `$set` document for a partial update.
/// Only supplied fields are written; the `_id` is never part of it.
fn set_document(patch: &PostPatch) -> bson::Document {
    let mut set = bson::Document::new();
    if let Some(title) = &patch.title {
        set.insert("title", title.as_str());
    }
    if let Some(content) = &patch.content {
        set.insert("content", content.as_str());
    }
    if let Some(author) = &patch.author {
        set.insert("author", author.as_str());
    }
    if let Some(created_at) = patch.created_at {
        set.insert("created_at", bson::DateTime::from_chrono(created_at));
    }
    set
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn list(&self, limit: usize) -> Result<Vec<Post>, StoreError> {
        let documents: Vec<PostDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .limit(limit as i64)
            .await
            .map_err(query_err)?
            .try_collect()
            .await
            .map_err(query_err)?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let document = self
            .collection
            .find_one(doc! { "_id": bson::Uuid::from_uuid_1(id) })
            .await
            .map_err(query_err)?;

        Ok(document.map(Into::into))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let post = Post::from_new(Uuid::new_v4(), new_post);

        self.collection
            .insert_one(PostDocument::from(post.clone()))
            .await
            .map_err(query_err)?;

        Ok(post)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, StoreError> {
        let set = set_document(&patch);
        if set.is_empty() {
            // An empty `$set` is rejected by the server; an empty patch
            // only needs to report whether the post exists.
            return self.find_by_id(id).await;
        }

        let document = self
            .collection
            .find_one_and_update(
                doc! { "_id": bson::Uuid::from_uuid_1(id) },
                doc! { "$set": set },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(query_err)?;

        Ok(document.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": bson::Uuid::from_uuid_1(id) })
            .await
            .map_err(query_err)?;

        Ok(result.deleted_count > 0)
    }
}
