//! HTTP handlers, one module per REST domain.
//!
//! Association resources are served by the generic handlers in [`links`];
//! their routes are registered from the link table at startup.

pub mod applications;
pub mod events;
pub mod groups;
pub mod links;
pub mod organizations;
pub mod resources;
pub mod tasks;
pub mod topics;
pub mod users;

use coact_core::AppError;
use uuid::Uuid;

/// Parse a validated reference field into a stored id. Validation has already
/// confirmed presence (and, where required, existence), so a parse failure
/// here means the field never pointed at a storable row.
pub(crate) fn parse_ref(field: &str, value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value)
        .map_err(|_| AppError::validation(field, format!("The field {} must be a valid id.", field)))
}

/// Parse an optional reference field; absent or empty means no reference.
pub(crate) fn parse_opt_ref(field: &str, value: Option<&str>) -> Result<Option<Uuid>, AppError> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => parse_ref(field, raw).map(Some),
    }
}
