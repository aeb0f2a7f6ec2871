//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! This crate contains the Post entity and the storage port with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
