//! Coact Core Library
//!
//! Core domain models, error types, configuration, and the validation layer
//! shared by the database and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::{EntityDirectory, EntityKind, ValidationPolicies};
