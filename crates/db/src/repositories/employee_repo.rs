//! Repository for the `employee_details` table.

use epms_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployeeDetails, EmployeeDetails, TeamMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, dept_id, manager_id, job_title";

/// Name of the unique constraint on `employee_details.user_id`.
pub const UQ_EMPLOYEE_USER_ID: &str = "uq_employee_details_user_id";

/// Provides operations on employee-to-department/manager mappings.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Link a login to a department and manager, returning the new row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEmployeeDetails,
    ) -> Result<EmployeeDetails, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_details (user_id, dept_id, manager_id, job_title)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeDetails>(&query)
            .bind(&input.user_id)
            .bind(input.dept_id)
            .bind(&input.manager_id)
            .bind(&input.job_title)
            .fetch_one(pool)
            .await
    }

    /// List every mapping ordered by EmpID.
    pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_details ORDER BY id ASC");
        sqlx::query_as::<_, EmployeeDetails>(&query)
            .fetch_all(pool)
            .await
    }

    /// Resolve a login identifier to its EmpID. `None` means the account is
    /// not mapped to an employee record.
    pub async fn find_emp_id_by_user_id(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM employee_details WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Everyone whose `manager_id` is the given login, with display names.
    pub async fn list_team(
        pool: &PgPool,
        manager_id: &str,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT ed.id AS emp_id, ed.user_id, u.first_name, u.last_name, \
                    ed.job_title, ed.dept_id \
             FROM employee_details ed \
             LEFT JOIN users u ON u.user_id = ed.user_id \
             WHERE ed.manager_id = $1 \
             ORDER BY ed.id ASC",
        )
        .bind(manager_id)
        .fetch_all(pool)
        .await
    }
}
