//! Employee detail models.

use epms_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `employee_details` table. `id` is the EmpID.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub id: DbId,
    pub user_id: String,
    pub dept_id: Option<DbId>,
    pub manager_id: Option<String>,
    pub job_title: Option<String>,
}

/// DTO for linking a login to a department and manager.
#[derive(Debug)]
pub struct CreateEmployeeDetails {
    pub user_id: String,
    pub dept_id: Option<DbId>,
    pub manager_id: Option<String>,
    pub job_title: Option<String>,
}

/// One member of a manager's team, joined with the login's display name.
///
/// Names are `None` when the login row has been deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub emp_id: DbId,
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub dept_id: Option<DbId>,
}
