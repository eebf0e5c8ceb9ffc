//! Validation layer
//!
//! Every write is validated by an ordered list of named rules before it is
//! persisted. Rules short-circuit: the first failure aborts the whole
//! validation with a single structured error, never an aggregate.
//!
//! - [`fields`] holds the reusable predicate checks (emptiness, flag range,
//!   date ordering).
//! - [`existence`] defines the [`EntityDirectory`] capability and the
//!   existence check built on it.
//! - [`policy`] is the rule/policy machinery for entity writes; [`entities`]
//!   instantiates the policies for organizations, groups and applications.
//! - [`links`] validates association rows from their [`LinkSpec`]
//!   descriptions.
//! - [`registry`] assembles one [`ValidationPolicies`] set at startup.

pub mod entities;
pub mod existence;
pub mod fields;
pub mod links;
pub mod policy;
pub mod registry;

pub use existence::{validate_object_existence, EntityDirectory, EntityKind};
pub use fields::{
    validate_creation_and_deletion_dates, validate_empty, validate_flags_number, Emptiness,
    MAX_FLAGS,
};
pub use links::{LinkCheck, LinkPolicy, LinkRule};
pub use policy::{FieldRule, Policy, ReferenceRule};
pub use registry::ValidationPolicies;
