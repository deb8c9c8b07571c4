//! Goal entity model.

use epms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `goals` table.
///
/// `status` is the stored label; it is only ever written together with
/// `completion_percent` by `GoalRepo`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: DbId,
    pub emp_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completion_percent: f64,
    pub status: String,
    pub assigned_by: String,
    pub created_at: Timestamp,
}
