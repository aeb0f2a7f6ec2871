//! # Quill Shared
//!
//! Request and response types for the HTTP surface, shared between the
//! server and any client-side consumer.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
