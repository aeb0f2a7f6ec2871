//! Error translation at the route boundary.

pub mod error;
