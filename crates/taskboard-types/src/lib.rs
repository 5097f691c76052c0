//! Taskboard Types - pure data types for the taskboard service
//!
//! This crate contains only plain record and patch definitions with no
//! async runtime dependencies.

pub mod project;
pub mod record;
pub mod task;
pub mod user;

pub use project::*;
pub use record::*;
pub use task::*;
pub use user::*;
