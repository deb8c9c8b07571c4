//! Small input checks shared by the goal and feedback paths.

use crate::error::CoreError;

/// Trim `value` and reject it if nothing is left.
///
/// `None` and whitespace-only strings both count as missing.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Reject a missing or non-positive identifier.
pub fn require_id(field: &str, value: Option<i64>) -> Result<i64, CoreError> {
    match value {
        Some(id) if id > 0 => Ok(id),
        Some(id) => Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {id}"
        ))),
        None => Err(CoreError::Validation(format!("{field} is required"))),
    }
}
