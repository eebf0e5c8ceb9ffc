//! Rule/policy machinery for entity writes.
//!
//! A [`Policy`] is an ordered list of named, independently togglable rules
//! over one write DTO type: field rules (pure predicates) first, then
//! reference rules (existence checks through the [`EntityDirectory`]).
//! Validation short-circuits on the first failing rule.
//!
//! Keeping every rule named and togglable makes gaps visible configuration:
//! a check the product has switched off ships as `enabled: false` instead of
//! commented-out code.

use crate::error::AppError;
use crate::validation::existence::{validate_object_existence, EntityDirectory, EntityKind};

/// A pure predicate over the write being validated.
pub struct FieldRule<T> {
    pub name: &'static str,
    pub enabled: bool,
    pub check: fn(&T) -> Result<(), AppError>,
}

/// An existence check: extract a raw id from the write and confirm a row of
/// `kind` carries it. A `None` or empty extraction is an existence failure
/// (callers that need a field-level error validate emptiness first).
pub struct ReferenceRule<T> {
    pub name: &'static str,
    pub enabled: bool,
    pub kind: EntityKind,
    pub value: fn(&T) -> Option<&str>,
}

/// Ordered validation policy for one entity type.
pub struct Policy<T> {
    entity: &'static str,
    field_rules: Vec<FieldRule<T>>,
    reference_rules: Vec<ReferenceRule<T>>,
}

impl<T> Policy<T> {
    pub fn new(
        entity: &'static str,
        field_rules: Vec<FieldRule<T>>,
        reference_rules: Vec<ReferenceRule<T>>,
    ) -> Self {
        Policy {
            entity,
            field_rules,
            reference_rules,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Run all enabled rules in declared order, aborting on the first failure.
    /// Field rules always run before reference rules, so no read against the
    /// entity store happens for a write that is already malformed.
    pub async fn validate(
        &self,
        record: &T,
        directory: &dyn EntityDirectory,
    ) -> Result<(), AppError> {
        for rule in self.field_rules.iter().filter(|r| r.enabled) {
            (rule.check)(record)?;
        }
        for rule in self.reference_rules.iter().filter(|r| r.enabled) {
            let raw = (rule.value)(record).unwrap_or("");
            validate_object_existence(directory, rule.kind, raw).await?;
        }
        Ok(())
    }

    /// Names of all rules in evaluation order, with their enabled state.
    pub fn rules(&self) -> Vec<(&'static str, bool)> {
        self.field_rules
            .iter()
            .map(|r| (r.name, r.enabled))
            .chain(self.reference_rules.iter().map(|r| (r.name, r.enabled)))
            .collect()
    }

    /// Toggle a rule by name. Returns false when no rule carries the name.
    pub fn set_rule_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(rule) = self.field_rules.iter_mut().find(|r| r.name == name) {
            rule.enabled = enabled;
            return true;
        }
        if let Some(rule) = self.reference_rules.iter_mut().find(|r| r.name == name) {
            rule.enabled = enabled;
            return true;
        }
        false
    }
}
