//! Validation-policy behavior against an in-memory entity directory.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use coact_core::error::{AppError, ErrorMetadata};
use coact_core::models::{
    link_spec, GroupWrite, OrganizationApplicationWrite, OrganizationWrite,
};
use coact_core::validation::{
    validate_object_existence, EntityDirectory, EntityKind, ValidationPolicies,
};

/// Directory double backed by plain string-id sets, counting lookups so tests
/// can observe whether validation reached the entity store at all.
#[derive(Default)]
struct MemoryDirectory {
    rows: HashMap<EntityKind, HashSet<String>>,
    lookups: AtomicUsize,
}

impl MemoryDirectory {
    fn with(rows: &[(EntityKind, &str)]) -> Self {
        let mut directory = MemoryDirectory::default();
        for (kind, id) in rows {
            directory
                .rows
                .entry(*kind)
                .or_default()
                .insert((*id).to_string());
        }
        directory
    }

    fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityDirectory for MemoryDirectory {
    async fn exists(&self, kind: EntityKind, id: &str) -> Result<bool, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.get(&kind).is_some_and(|ids| ids.contains(id)))
    }
}

fn organization_write() -> OrganizationWrite {
    OrganizationWrite {
        name: "River Cleanup Collective".to_string(),
        tagline: "Restoring the waterfront".to_string(),
        social_accounts: "@rivercleanup".to_string(),
        location: "Rotterdam".to_string(),
        description: "Monthly cleanups along the Maas".to_string(),
        topic: "c2d60a15-2b33-4b5b-a122-5b77a9a2c8b2".to_string(),
        flags: Some(3),
        created_by: None,
    }
}

fn group_write(created_by: &str) -> GroupWrite {
    GroupWrite {
        name: "North Bank Crew".to_string(),
        tagline: "Weekly shifts".to_string(),
        social_accounts: "@northbank".to_string(),
        location: "Rotterdam".to_string(),
        description: "Covers the north bank stretch".to_string(),
        topic: "c2d60a15-2b33-4b5b-a122-5b77a9a2c8b2".to_string(),
        flags: None,
        created_by: created_by.to_string(),
        creation_date: None,
        deletion_date: None,
    }
}

#[tokio::test]
async fn organization_member_with_empty_org_id_fails_with_combined_error() {
    let directory = MemoryDirectory::with(&[(EntityKind::User, "u1")]);
    let policies = ValidationPolicies::standard();
    let spec = link_spec("organization_members").expect("registered");

    let write = spec
        .parse_payload(&serde_json::json!({ "org_id": "", "user_id": "u1" }))
        .expect("parses");
    let err = policies
        .link("organization_members")
        .expect("policy registered")
        .validate(&write, &directory)
        .await
        .unwrap_err();

    assert_eq!(
        err.client_message(),
        "The fields org_id and user_id cannot be empty. They must be filled \
         so that the user can be added to the organization."
    );
    assert_eq!(err.error_code(), "invalid_value");
    // Fail-fast ordering: the combined check fired before any store read.
    assert_eq!(directory.lookup_count(), 0);
}

#[tokio::test]
async fn organization_topic_with_unknown_topic_fails_naming_entity_and_id() {
    let directory = MemoryDirectory::with(&[(EntityKind::Organization, "org1")]);
    let policies = ValidationPolicies::standard();
    let spec = link_spec("organization_topics").expect("registered");

    let write = spec
        .parse_payload(&serde_json::json!({ "org_id": "org1", "topic_id": "nope" }))
        .expect("parses");
    let err = policies
        .link("organization_topics")
        .expect("policy registered")
        .validate(&write, &directory)
        .await
        .unwrap_err();

    assert_eq!(err.client_message(), "Topic with id nope does not exist");
    assert_eq!(err.http_status_code(), 404);
    // org_id was checked first (declared order), then topic_id.
    assert_eq!(directory.lookup_count(), 2);
}

#[tokio::test]
async fn existence_check_succeeds_iff_the_row_is_present() {
    let directory = MemoryDirectory::with(&[(EntityKind::Event, "e1")]);

    assert!(validate_object_existence(&directory, EntityKind::Event, "e1")
        .await
        .is_ok());
    assert!(validate_object_existence(&directory, EntityKind::Event, "e2")
        .await
        .is_err());
    // Same id, different entity type: not a row of that type.
    assert!(validate_object_existence(&directory, EntityKind::User, "e1")
        .await
        .is_err());
    // Empty id is an existence failure, not a separate path.
    assert!(validate_object_existence(&directory, EntityKind::Event, "")
        .await
        .is_err());
}

#[tokio::test]
async fn organization_fails_when_any_required_field_is_empty() {
    let directory = MemoryDirectory::default();
    let policies = ValidationPolicies::standard();

    let blank_each: [fn(&mut OrganizationWrite); 6] = [
        |w| w.name.clear(),
        |w| w.tagline.clear(),
        |w| w.social_accounts.clear(),
        |w| w.location.clear(),
        |w| w.description.clear(),
        |w| w.topic.clear(),
    ];
    for blank in blank_each {
        let mut write = organization_write();
        blank(&mut write);
        let err = policies
            .organization
            .validate(&write, &directory)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "invalid_value");
    }
}

#[tokio::test]
async fn organization_with_created_by_omitted_succeeds() {
    let directory = MemoryDirectory::default();
    let policies = ValidationPolicies::standard();

    let write = organization_write();
    policies
        .organization
        .validate(&write, &directory)
        .await
        .expect("creator existence is not enforced for organizations");
    assert_eq!(directory.lookup_count(), 0);
}

#[tokio::test]
async fn organization_creator_check_can_be_enabled() {
    let directory = MemoryDirectory::default();
    let mut policies = ValidationPolicies::standard();
    assert!(policies
        .organization
        .set_rule_enabled("created_by_exists", true));

    let mut write = organization_write();
    write.created_by = Some("ghost".to_string());
    let err = policies
        .organization
        .validate(&write, &directory)
        .await
        .unwrap_err();
    assert_eq!(err.client_message(), "User with id ghost does not exist");
}

#[tokio::test]
async fn organization_flags_out_of_range_fails() {
    let directory = MemoryDirectory::default();
    let policies = ValidationPolicies::standard();

    let mut write = organization_write();
    write.flags = Some(4096);
    let err = policies
        .organization
        .validate(&write, &directory)
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("flags"));
}

#[tokio::test]
async fn group_with_reversed_dates_fails_date_ordering() {
    let directory = MemoryDirectory::with(&[(EntityKind::User, "u1")]);
    let policies = ValidationPolicies::standard();

    let mut write = group_write("u1");
    write.creation_date = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    write.deletion_date = Some(Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap());

    let err = policies.group.validate(&write, &directory).await.unwrap_err();
    assert_eq!(
        err.client_message(),
        "The field creation_date must be strictly before deletion_date."
    );
    // The date rule fired before the creator existence check.
    assert_eq!(directory.lookup_count(), 0);
}

#[tokio::test]
async fn group_with_existing_creator_passes() {
    let directory = MemoryDirectory::with(&[(EntityKind::User, "u1")]);
    let policies = ValidationPolicies::standard();

    let write = group_write("u1");
    policies
        .group
        .validate(&write, &directory)
        .await
        .expect("all rules pass");
    assert_eq!(directory.lookup_count(), 1);
}

#[tokio::test]
async fn group_with_empty_creator_fails_before_existence() {
    let directory = MemoryDirectory::default();
    let policies = ValidationPolicies::standard();

    let write = group_write("");
    let err = policies.group.validate(&write, &directory).await.unwrap_err();
    assert_eq!(err.field(), Some("created_by"));
    assert_eq!(directory.lookup_count(), 0);
}

#[tokio::test]
async fn application_requires_status_and_ordered_dates() {
    let directory = MemoryDirectory::default();
    let policies = ValidationPolicies::standard();

    let write = OrganizationApplicationWrite {
        status: String::new(),
        creation_date: None,
        deletion_date: None,
    };
    let err = policies
        .organization_application
        .validate(&write, &directory)
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("status"));

    let write = OrganizationApplicationWrite {
        status: "pending".to_string(),
        creation_date: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        deletion_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
    };
    assert!(policies
        .organization_application
        .validate(&write, &directory)
        .await
        .is_err());

    let write = OrganizationApplicationWrite {
        status: "pending".to_string(),
        creation_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        deletion_date: None,
    };
    assert!(policies
        .organization_application
        .validate(&write, &directory)
        .await
        .is_ok());
}

#[tokio::test]
async fn link_rules_are_individually_togglable() {
    let directory = MemoryDirectory::default();
    let mut policies = ValidationPolicies::standard();
    let spec = link_spec("group_members").expect("registered");

    let policy = policies.link_mut("group_members").expect("policy registered");
    assert!(policy.set_rule_enabled("required_fields", false));

    // With the combined check off, the empty id falls through to the
    // existence rule and surfaces as a missing reference instead.
    let write = spec
        .parse_payload(&serde_json::json!({ "group_id": "", "user_id": "u1" }))
        .expect("parses");
    let err = policies
        .link("group_members")
        .expect("policy registered")
        .validate(&write, &directory)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "not_found");
    assert_eq!(err.client_message(), "Group with id  does not exist");
}

#[tokio::test]
async fn organization_task_checks_references_in_declared_order() {
    let directory = MemoryDirectory::with(&[
        (EntityKind::Organization, "org1"),
        (EntityKind::Task, "t1"),
    ]);
    let policies = ValidationPolicies::standard();
    let spec = link_spec("organization_tasks").expect("registered");

    let write = spec
        .parse_payload(
            &serde_json::json!({ "org_id": "org1", "task_id": "t1", "group_id": "g9" }),
        )
        .expect("parses");
    let err = policies
        .link("organization_tasks")
        .expect("policy registered")
        .validate(&write, &directory)
        .await
        .unwrap_err();

    assert_eq!(err.client_message(), "Group with id g9 does not exist");
    assert_eq!(directory.lookup_count(), 3);
}
