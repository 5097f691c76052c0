//! HTTP handlers

pub mod health;
pub mod projects;
pub mod tasks;
pub mod users;

pub use health::health;
