//! Post store implementations.

mod memory;

#[cfg(feature = "mongodb")]
mod document;
#[cfg(feature = "mongodb")]
mod mongo;

pub use memory::MemoryPostStore;

#[cfg(feature = "mongodb")]
pub use mongo::MongoPostStore;

/// Configuration for the document database.
///
/// Defined unconditionally so the server's config layer can parse it even
/// in builds without the `mongodb` feature.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
}
