//! Required-field checks applied to request payloads before any write.
//!
//! Storage does not enforce non-blank names; these helpers do, and every
//! rejection names the offending field so clients can point at it.

use crate::error::CoreError;

/// Require a string field to be present and contain something other than
/// whitespace. Returns the value unchanged on success.
pub fn require_non_blank<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(CoreError::Validation(format!("{field} must not be blank"))),
        None => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Require a non-string field to be present.
pub fn require_present<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Check an optional string field: absent is fine, present must be non-blank.
pub fn optional_non_blank<'a>(
    value: Option<&'a str>,
    field: &str,
) -> Result<Option<&'a str>, CoreError> {
    match value {
        None => Ok(None),
        Some(_) => require_non_blank(value, field).map(Some),
    }
}
