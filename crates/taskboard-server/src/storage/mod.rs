//! Storage layer
//!
//! Process-local in-memory repositories; nothing is persisted.

pub mod repository;

pub use repository::Repository;
