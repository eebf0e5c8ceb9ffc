//! The process-wide validation-policy registry.
//!
//! Built once at startup and shared through application state; association
//! policies come straight from the link registration table, so a relation
//! added there is validated without further wiring.

use std::collections::HashMap;

use crate::models::{
    link_specs, GroupWrite, OrganizationApplicationWrite, OrganizationWrite,
};
use crate::validation::entities::{
    group_policy, organization_application_policy, organization_policy,
};
use crate::validation::links::LinkPolicy;
use crate::validation::policy::Policy;

/// All validation policies, keyed by entity or association type.
pub struct ValidationPolicies {
    pub organization: Policy<OrganizationWrite>,
    pub group: Policy<GroupWrite>,
    pub organization_application: Policy<OrganizationApplicationWrite>,
    links: HashMap<&'static str, LinkPolicy>,
}

impl ValidationPolicies {
    /// The standard policy set.
    pub fn standard() -> Self {
        let links = link_specs()
            .iter()
            .map(|spec| (spec.resource, LinkPolicy::standard(spec)))
            .collect();
        ValidationPolicies {
            organization: organization_policy(),
            group: group_policy(),
            organization_application: organization_application_policy(),
            links,
        }
    }

    /// Policy for an association type, by REST collection name.
    pub fn link(&self, resource: &str) -> Option<&LinkPolicy> {
        self.links.get(resource)
    }

    /// Mutable access for rule toggling (startup configuration and tests).
    pub fn link_mut(&mut self, resource: &str) -> Option<&mut LinkPolicy> {
        self.links.get_mut(resource)
    }
}

impl Default for ValidationPolicies {
    fn default() -> Self {
        Self::standard()
    }
}
