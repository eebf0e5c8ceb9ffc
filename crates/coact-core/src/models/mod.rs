//! Data models for the application
//!
//! This module contains all record definitions and request DTOs, organized by
//! domain. Association (join) rows are described by the registration table in
//! [`link`] rather than one struct per table.

mod application;
mod event;
mod group;
mod link;
mod organization;
mod pagination;
mod resource;
mod task;
mod topic;
mod user;

// Re-export all models for convenient imports
pub use application::*;
pub use event::*;
pub use group::*;
pub use link::*;
pub use organization::*;
pub use pagination::*;
pub use resource::*;
pub use task::*;
pub use topic::*;
pub use user::*;
