//! Feedback entity model.

use epms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `feedback` table.
///
/// `score` is stored as `NUMERIC(4,2)` and read back through a `FLOAT8` cast.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: DbId,
    pub emp_id: DbId,
    pub manager_id: String,
    pub score: f64,
    pub comments: String,
    pub created_at: Timestamp,
}
