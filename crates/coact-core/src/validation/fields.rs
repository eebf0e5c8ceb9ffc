//! Reusable field-level predicate checks.

use chrono::{DateTime, Utc};

use crate::error::AppError;

/// Width of the application flag mask. Flags are a packed bit field, so the
/// permitted numeric range is `0..=MAX_FLAGS`.
pub const FLAG_BITS: u32 = 10;

/// Largest value the `flags` field may carry.
pub const MAX_FLAGS: i64 = (1 << FLAG_BITS) - 1;

/// Values that can be meaningfully empty: strings, collections, and options
/// over either.
pub trait Emptiness {
    fn is_value_empty(&self) -> bool;
}

impl Emptiness for str {
    fn is_value_empty(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_value_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    fn is_value_empty(&self) -> bool {
        match self {
            None => true,
            Some(inner) => inner.is_value_empty(),
        }
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_value_empty(&self) -> bool {
        self.is_empty()
    }
}

/// Fail with a validation error naming `field` when `value` is empty.
pub fn validate_empty<V: Emptiness + ?Sized>(value: &V, field: &str) -> Result<(), AppError> {
    if value.is_value_empty() {
        return Err(AppError::validation(
            field,
            format!("The field {} cannot be empty.", field),
        ));
    }
    Ok(())
}

/// Fail when `flags` is present and outside the permitted mask range; absent
/// flags pass.
pub fn validate_flags_number(flags: Option<i64>) -> Result<(), AppError> {
    match flags {
        Some(value) if !(0..=MAX_FLAGS).contains(&value) => Err(AppError::validation(
            "flags",
            format!("The field flags must be between 0 and {}.", MAX_FLAGS),
        )),
        _ => Ok(()),
    }
}

/// Fail when both dates are present and `creation_date` is not strictly
/// before `deletion_date`; either date being absent passes.
pub fn validate_creation_and_deletion_dates(
    creation_date: Option<DateTime<Utc>>,
    deletion_date: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let (Some(creation), Some(deletion)) = (creation_date, deletion_date) {
        if creation >= deletion {
            return Err(AppError::validation_multi(
                "The field creation_date must be strictly before deletion_date.",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorMetadata;
    use chrono::TimeZone;

    #[test]
    fn test_validate_empty_strings_and_options() {
        assert!(validate_empty("value", "name").is_ok());
        let err = validate_empty("", "name").unwrap_err();
        assert_eq!(err.field(), Some("name"));
        assert_eq!(err.client_message(), "The field name cannot be empty.");

        assert!(validate_empty(&Some("x".to_string()), "created_by").is_ok());
        assert!(validate_empty(&None::<String>, "created_by").is_err());
        assert!(validate_empty(&Some(String::new()), "created_by").is_err());
    }

    #[test]
    fn test_validate_empty_collections() {
        assert!(validate_empty(&vec![1], "items").is_ok());
        assert!(validate_empty(&Vec::<i32>::new(), "items").is_err());
    }

    #[test]
    fn test_validate_flags_number_bounds() {
        assert!(validate_flags_number(None).is_ok());
        assert!(validate_flags_number(Some(0)).is_ok());
        assert!(validate_flags_number(Some(MAX_FLAGS)).is_ok());
        assert!(validate_flags_number(Some(-1)).is_err());
        assert!(validate_flags_number(Some(MAX_FLAGS + 1)).is_err());
    }

    #[test]
    fn test_validate_dates_ordering() {
        let early = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert!(validate_creation_and_deletion_dates(Some(early), Some(late)).is_ok());
        assert!(validate_creation_and_deletion_dates(Some(late), Some(early)).is_err());
        // Equal timestamps are not strictly ordered.
        assert!(validate_creation_and_deletion_dates(Some(early), Some(early)).is_err());
        assert!(validate_creation_and_deletion_dates(None, Some(late)).is_ok());
        assert!(validate_creation_and_deletion_dates(Some(early), None).is_ok());
        assert!(validate_creation_and_deletion_dates(None, None).is_ok());
    }
}
