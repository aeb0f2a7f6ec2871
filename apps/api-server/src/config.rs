//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::store::MongoConfig;

/// Selected update contract for `PUT /blog-posts/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Apply only the fields supplied in the body.
    #[default]
    Patch,
    /// Require every field plus a body id matching the path id.
    Replace,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub list_limit: usize,
    pub update_mode: UpdateMode,
    pub mongodb: Option<MongoConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mongodb = env::var("MONGODB_URL").ok().map(|url| MongoConfig {
            url,
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "blog".to_string()),
            collection: env::var("MONGODB_COLLECTION").unwrap_or_else(|_| "blogposts".to_string()),
        });

        let update_mode = match env::var("UPDATE_MODE").as_deref() {
            Ok("replace") => UpdateMode::Replace,
            Ok("patch") | Err(_) => UpdateMode::Patch,
            Ok(other) => {
                tracing::warn!("Unknown UPDATE_MODE `{}`, defaulting to patch", other);
                UpdateMode::Patch
            }
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            list_limit: env::var("LIST_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(10),
            update_mode,
            mongodb,
        }
    }
}
