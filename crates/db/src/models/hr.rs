//! Read models for the organisation-wide HR dashboard.

use epms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Workforce size and mean feedback score.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceKpis {
    pub total_employees: i64,
    pub average_score: f64,
}

/// Head count for one department.
#[derive(Debug, Clone, FromRow)]
pub struct DeptHeadcount {
    pub dept_name: String,
    pub headcount: i64,
}

/// One department's monetary figure.
#[derive(Debug, Clone, FromRow)]
pub struct DeptMetric {
    pub dept_name: String,
    pub value: f64,
}

/// A recent feedback entry joined with display names.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackFeedItem {
    pub id: DbId,
    /// Login first + last name, or the employee's user id if the login is gone.
    pub emp_name: String,
    pub manager_name: String,
    pub department: Option<String>,
    pub score: f64,
    pub feedback_text: String,
    pub created_at: Timestamp,
}
