//! # Quill Infrastructure
//!
//! Concrete implementations of the storage port defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `mongodb` (default) - MongoDB document store support
//! - without it, only the in-memory store is compiled

pub mod store;

pub use store::MemoryPostStore;

#[cfg(feature = "mongodb")]
pub use store::MongoPostStore;
