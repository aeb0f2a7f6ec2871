//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::domain::NewPost;
use quill_core::ports::PostStore;
use quill_infra::store::MemoryPostStore;

#[cfg(feature = "mongodb")]
use quill_infra::store::MongoPostStore;

use crate::config::{AppConfig, UpdateMode};

/// Shared application state.
///
/// The post store is injected here once at startup; handlers only ever see
/// the trait object.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub list_limit: usize,
    pub update_mode: UpdateMode,
}

impl AppState {
    /// Build the application state with the appropriate store implementation.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "mongodb")]
        let posts: Arc<dyn PostStore> = {
            if let Some(mongo) = &config.mongodb {
                match MongoPostStore::connect(mongo).await {
                    Ok(store) => Arc::new(store),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(seeded_memory_store().await)
                    }
                }
            } else {
                tracing::warn!("MONGODB_URL not set. Running with the in-memory store.");
                Arc::new(seeded_memory_store().await)
            }
        };

        #[cfg(not(feature = "mongodb"))]
        let posts: Arc<dyn PostStore> = {
            tracing::info!("Built without mongodb support - using the in-memory store");
            Arc::new(seeded_memory_store().await)
        };

        tracing::info!("Application state initialized");

        Self {
            posts,
            list_limit: config.list_limit,
            update_mode: config.update_mode,
        }
    }

    /// Build state over an explicit store - used by embedding harnesses
    /// and tests.
    pub fn with_store(
        posts: Arc<dyn PostStore>,
        list_limit: usize,
        update_mode: UpdateMode,
    ) -> Self {
        Self {
            posts,
            list_limit,
            update_mode,
        }
    }
}

/// Memory store pre-populated with sample posts, so a fresh instance has
/// some data to look at.
async fn seeded_memory_store() -> MemoryPostStore {
    let store = MemoryPostStore::new();

    for (title, content, author) in [
        ("CRUD applications", "blog text", "Sean"),
        ("Story 2", "blog text 2", "Meghan"),
    ] {
        let sample = NewPost {
            title: title.to_owned(),
            content: content.to_owned(),
            author: author.to_owned(),
            created_at: None,
        };
        if let Err(error) = store.create(sample).await {
            tracing::warn!(%error, "Failed to seed sample post");
        }
    }

    store
}
