pub mod auth;
pub mod dashboard;
pub mod feedback;
pub mod goals;
pub mod organisation;
pub mod users;

use epms_core::error::CoreError;
use serde_json::Value;

/// Read an optional numeric body field sent either as a JSON number or as a
/// string holding one. `null` counts as absent.
pub(crate) fn optional_number(
    field: &str,
    raw: Option<&Value>,
) -> Result<Option<f64>, CoreError> {
    let not_a_number = || CoreError::Validation(format!("{field} must be a number"));

    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(not_a_number),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| not_a_number()),
        Some(_) => Err(not_a_number()),
    }
}
