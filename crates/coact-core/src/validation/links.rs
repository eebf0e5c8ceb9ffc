//! Validation of association (join) rows.
//!
//! Each association type gets a [`LinkPolicy`] derived from its [`LinkSpec`]:
//! one combined non-empty rule over every foreign-key field, then one
//! existence rule per field in declared order. The combined rule always runs
//! first, so an association write with any empty id never reaches the entity
//! store.

use crate::error::AppError;
use crate::models::{LinkSpec, LinkWrite};
use crate::validation::existence::{validate_object_existence, EntityDirectory};

/// What a single link rule does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCheck {
    /// Combined emptiness check over all foreign-key fields.
    RequiredFields,
    /// Existence check for the ref at this index of the link's declared order.
    Exists(usize),
}

/// One named, togglable rule of a link policy.
#[derive(Debug, Clone)]
pub struct LinkRule {
    pub name: String,
    pub enabled: bool,
    pub check: LinkCheck,
}

/// Ordered validation policy for one association type.
pub struct LinkPolicy {
    spec: &'static LinkSpec,
    rules: Vec<LinkRule>,
}

impl LinkPolicy {
    /// The standard rule set: required fields, then each reference in order.
    pub fn standard(spec: &'static LinkSpec) -> Self {
        let mut rules = vec![LinkRule {
            name: "required_fields".to_string(),
            enabled: true,
            check: LinkCheck::RequiredFields,
        }];
        for (index, field) in spec.refs.iter().enumerate() {
            rules.push(LinkRule {
                name: format!("{}_exists", field.column),
                enabled: true,
                check: LinkCheck::Exists(index),
            });
        }
        LinkPolicy { spec, rules }
    }

    pub fn spec(&self) -> &'static LinkSpec {
        self.spec
    }

    /// Run all enabled rules in order, aborting on the first failure.
    pub async fn validate(
        &self,
        write: &LinkWrite,
        directory: &dyn EntityDirectory,
    ) -> Result<(), AppError> {
        for rule in self.rules.iter().filter(|r| r.enabled) {
            match rule.check {
                LinkCheck::RequiredFields => self.check_required(write)?,
                LinkCheck::Exists(index) => {
                    let field = &self.spec.refs[index];
                    let raw = write.values.get(index).map(String::as_str).unwrap_or("");
                    validate_object_existence(directory, field.kind, raw).await?;
                }
            }
        }
        Ok(())
    }

    fn check_required(&self, write: &LinkWrite) -> Result<(), AppError> {
        let any_empty = self
            .spec
            .refs
            .iter()
            .enumerate()
            .any(|(i, _)| write.values.get(i).map(String::as_str).unwrap_or("").is_empty());
        if any_empty {
            return Err(AppError::validation_multi(format!(
                "The fields {} cannot be empty. They must be filled so that {}.",
                self.spec.field_list(),
                self.spec.purpose
            )));
        }
        Ok(())
    }

    /// Names of all rules in evaluation order, with their enabled state.
    pub fn rules(&self) -> Vec<(&str, bool)> {
        self.rules.iter().map(|r| (r.name.as_str(), r.enabled)).collect()
    }

    /// Toggle a rule by name. Returns false when no rule carries the name.
    pub fn set_rule_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.name == name) {
            rule.enabled = enabled;
            return true;
        }
        false
    }
}
