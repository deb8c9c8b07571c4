//! Shared response envelope types for API handlers.
//!
//! Record and list responses use a `{ "data": ... }` envelope. The three
//! dashboards return their own top-level shapes instead.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: goal }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
