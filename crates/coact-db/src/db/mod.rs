//! Database repositories for the data access layer
//!
//! Each repository owns the SQL for one domain and provides CRUD operations;
//! association tables share the single [`LinkRepository`], which derives its
//! SQL from the link registration table. Existence point reads live in
//! [`directory`].

pub mod applications;
pub mod content;
pub mod directory;
pub mod groups;
pub mod links;
pub mod organizations;

pub use applications::{OrganizationApplicationRepository, OrganizationApplicationStatusRepository};
pub use content::{EventRepository, ResourceRepository, TaskRepository, TopicRepository, UserRepository};
pub use directory::PgEntityDirectory;
pub use groups::GroupRepository;
pub use links::LinkRepository;
pub use organizations::OrganizationRepository;
