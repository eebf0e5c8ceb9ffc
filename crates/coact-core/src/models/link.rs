//! Association (join) row descriptions.
//!
//! Every many-to-many relation in the schema is a pure join row: an id, two
//! or three foreign keys, and a creation timestamp. Rather than one model
//! struct per table, each relation is described by a [`LinkSpec`] entry in the
//! [`link_specs`] registration table; routes, validation policies and SQL are
//! all derived from it once at startup.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::AppError;
use crate::validation::EntityKind;

/// One foreign-key field of an association row.
#[derive(Debug, Clone, Copy)]
pub struct RefField {
    /// Wire and column name, e.g. `org_id`.
    pub column: &'static str,
    /// Entity type the id must reference.
    pub kind: EntityKind,
}

/// Static description of one association type: its REST collection name, its
/// table, its foreign-key fields in declared order, and the phrase used in the
/// combined empty-fields error.
#[derive(Debug, Clone, Copy)]
pub struct LinkSpec {
    pub resource: &'static str,
    pub table: &'static str,
    pub refs: &'static [RefField],
    pub purpose: &'static str,
}

/// A stored association row. `values` parallels the owning [`LinkSpec`]'s
/// `refs` order.
#[derive(Debug, Clone, Serialize)]
pub struct LinkRow {
    pub id: Uuid,
    pub values: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Foreign-key values of an incoming association write, still as raw strings.
/// Kept unparsed so emptiness and existence rules see exactly what the client
/// sent.
#[derive(Debug, Clone)]
pub struct LinkWrite {
    pub values: Vec<String>,
}

impl LinkSpec {
    /// Extract this association's foreign-key fields from a flat JSON body.
    /// A missing or null field becomes an empty string so it fails the
    /// emptiness rule rather than a deserialization error.
    pub fn parse_payload(&self, body: &Value) -> Result<LinkWrite, AppError> {
        let mut values = Vec::with_capacity(self.refs.len());
        for field in self.refs {
            let value = match body.get(field.column) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(_) => {
                    return Err(AppError::validation(
                        field.column,
                        format!("The field {} must be a string id.", field.column),
                    ))
                }
            };
            values.push(value);
        }
        Ok(LinkWrite { values })
    }

    /// Parse validated foreign-key strings into UUIDs for persistence.
    pub fn parse_ids(&self, write: &LinkWrite) -> Result<Vec<Uuid>, AppError> {
        self.refs
            .iter()
            .zip(&write.values)
            .map(|(field, raw)| {
                Uuid::parse_str(raw).map_err(|_| {
                    AppError::validation(
                        field.column,
                        format!("The field {} must be a valid id.", field.column),
                    )
                })
            })
            .collect()
    }

    /// Human-readable list of this association's fields: "org_id and user_id",
    /// "org_id, task_id and group_id".
    pub fn field_list(&self) -> String {
        let names: Vec<&str> = self.refs.iter().map(|f| f.column).collect();
        match names.as_slice() {
            [] => String::new(),
            [only] => (*only).to_string(),
            [init @ .., last] => format!("{} and {}", init.join(", "), last),
        }
    }

    /// Serialize a stored row using this association's column names.
    pub fn row_json(&self, row: &LinkRow) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("id".to_string(), json!(row.id));
        for (field, id) in self.refs.iter().zip(&row.values) {
            map.insert(field.column.to_string(), json!(id));
        }
        map.insert("created_at".to_string(), json!(row.created_at));
        Value::Object(map)
    }
}

/// The registration table: every association type in the schema.
///
/// Route setup and the validation-policy registry iterate this table at
/// startup; adding a relation here is all that is needed to expose it.
pub fn link_specs() -> &'static [LinkSpec] {
    static LINKS: &[LinkSpec] = &[
        LinkSpec {
            resource: "organization_members",
            table: "organization_members",
            refs: &[
                RefField { column: "org_id", kind: EntityKind::Organization },
                RefField { column: "user_id", kind: EntityKind::User },
            ],
            purpose: "the user can be added to the organization",
        },
        LinkSpec {
            resource: "organization_resources",
            table: "organization_resources",
            refs: &[
                RefField { column: "org_id", kind: EntityKind::Organization },
                RefField { column: "resource_id", kind: EntityKind::Resource },
            ],
            purpose: "the resource can be added to the organization",
        },
        LinkSpec {
            resource: "organization_tasks",
            table: "organization_tasks",
            refs: &[
                RefField { column: "org_id", kind: EntityKind::Organization },
                RefField { column: "task_id", kind: EntityKind::Task },
                RefField { column: "group_id", kind: EntityKind::Group },
            ],
            purpose: "the task can be assigned within the organization",
        },
        LinkSpec {
            resource: "organization_topics",
            table: "organization_topics",
            refs: &[
                RefField { column: "org_id", kind: EntityKind::Organization },
                RefField { column: "topic_id", kind: EntityKind::Topic },
            ],
            purpose: "the topic can be added to the organization",
        },
        LinkSpec {
            resource: "organization_events",
            table: "organization_events",
            refs: &[
                RefField { column: "org_id", kind: EntityKind::Organization },
                RefField { column: "event_id", kind: EntityKind::Event },
            ],
            purpose: "the event can be added to the organization",
        },
        LinkSpec {
            resource: "group_members",
            table: "group_members",
            refs: &[
                RefField { column: "group_id", kind: EntityKind::Group },
                RefField { column: "user_id", kind: EntityKind::User },
            ],
            purpose: "the user can be added to the group",
        },
        LinkSpec {
            resource: "group_resources",
            table: "group_resources",
            refs: &[
                RefField { column: "group_id", kind: EntityKind::Group },
                RefField { column: "resource_id", kind: EntityKind::Resource },
            ],
            purpose: "the resource can be added to the group",
        },
        LinkSpec {
            resource: "group_topics",
            table: "group_topics",
            refs: &[
                RefField { column: "group_id", kind: EntityKind::Group },
                RefField { column: "topic_id", kind: EntityKind::Topic },
            ],
            purpose: "the topic can be added to the group",
        },
        LinkSpec {
            resource: "group_events",
            table: "group_events",
            refs: &[
                RefField { column: "group_id", kind: EntityKind::Group },
                RefField { column: "event_id", kind: EntityKind::Event },
            ],
            purpose: "the event can be added to the group",
        },
        LinkSpec {
            resource: "user_resources",
            table: "user_resources",
            refs: &[
                RefField { column: "user_id", kind: EntityKind::User },
                RefField { column: "resource_id", kind: EntityKind::Resource },
            ],
            purpose: "the resource can be linked to the user",
        },
        LinkSpec {
            resource: "user_tasks",
            table: "user_tasks",
            refs: &[
                RefField { column: "user_id", kind: EntityKind::User },
                RefField { column: "task_id", kind: EntityKind::Task },
            ],
            purpose: "the task can be assigned to the user",
        },
        LinkSpec {
            resource: "user_topics",
            table: "user_topics",
            refs: &[
                RefField { column: "user_id", kind: EntityKind::User },
                RefField { column: "topic_id", kind: EntityKind::Topic },
            ],
            purpose: "the topic can be followed by the user",
        },
        LinkSpec {
            resource: "resource_topics",
            table: "resource_topics",
            refs: &[
                RefField { column: "resource_id", kind: EntityKind::Resource },
                RefField { column: "topic_id", kind: EntityKind::Topic },
            ],
            purpose: "the resource can be tagged with the topic",
        },
    ];
    LINKS
}

/// Look up an association type by its REST collection name.
pub fn link_spec(resource: &str) -> Option<&'static LinkSpec> {
    link_specs().iter().find(|s| s.resource == resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn members_spec() -> &'static LinkSpec {
        link_spec("organization_members").expect("registered")
    }

    #[test]
    fn test_parse_payload_missing_fields_become_empty() {
        let write = members_spec()
            .parse_payload(&json!({ "user_id": "u1" }))
            .expect("parses");
        assert_eq!(write.values, vec!["".to_string(), "u1".to_string()]);
    }

    #[test]
    fn test_parse_payload_rejects_non_string_ids() {
        let err = members_spec()
            .parse_payload(&json!({ "org_id": 7, "user_id": "u1" }))
            .unwrap_err();
        assert_eq!(err.field(), Some("org_id"));
    }

    #[test]
    fn test_field_list_two_and_three_fields() {
        assert_eq!(members_spec().field_list(), "org_id and user_id");
        let tasks = link_spec("organization_tasks").expect("registered");
        assert_eq!(tasks.field_list(), "org_id, task_id and group_id");
    }

    #[test]
    fn test_row_json_uses_declared_columns() {
        let spec = members_spec();
        let row = LinkRow {
            id: Uuid::new_v4(),
            values: vec![Uuid::new_v4(), Uuid::new_v4()],
            created_at: Utc::now(),
        };
        let value = spec.row_json(&row);
        assert_eq!(value["org_id"], json!(row.values[0]));
        assert_eq!(value["user_id"], json!(row.values[1]));
        assert_eq!(value["id"], json!(row.id));
    }

    #[test]
    fn test_every_resource_registered_once() {
        let mut names: Vec<&str> = link_specs().iter().map(|s| s.resource).collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before);
    }
}
