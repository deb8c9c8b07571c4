//! Organisation-wide read queries for the HR dashboard.

use epms_core::roles::{ROLE_EMPLOYEE, ROLE_MANAGER};
use sqlx::PgPool;

use crate::models::hr::{DeptHeadcount, DeptMetric, FeedbackFeedItem, WorkforceKpis};

/// Provides the aggregate reads behind the HR dashboard.
pub struct HrAnalyticsRepo;

impl HrAnalyticsRepo {
    /// Count of Employee and Manager logins, and the mean feedback score
    /// rounded to two decimals (`0` when there is no feedback).
    pub async fn workforce_kpis(pool: &PgPool) -> Result<WorkforceKpis, sqlx::Error> {
        sqlx::query_as::<_, WorkforceKpis>(
            "SELECT \
                (SELECT COUNT(*) FROM users WHERE role = ANY($1)) AS total_employees, \
                (SELECT COALESCE(ROUND(AVG(score), 2), 0)::FLOAT8 FROM feedback) AS average_score",
        )
        .bind(&[ROLE_EMPLOYEE, ROLE_MANAGER][..])
        .fetch_one(pool)
        .await
    }

    /// Per-department head count, ordered by department name.
    ///
    /// `users` has no department column, so a department's head count is its
    /// employee records plus one for each distinct manager those records
    /// name. A manager of two departments is counted in both.
    pub async fn headcount_by_department(
        pool: &PgPool,
    ) -> Result<Vec<DeptHeadcount>, sqlx::Error> {
        sqlx::query_as::<_, DeptHeadcount>(
            "SELECT d.name AS dept_name, \
                    COALESCE(emp.employee_count, 0) + COALESCE(mgr.manager_count, 0) AS headcount \
             FROM departments d \
             LEFT JOIN ( \
                 SELECT dept_id, COUNT(*) AS employee_count \
                 FROM employee_details \
                 GROUP BY dept_id \
             ) emp ON emp.dept_id = d.id \
             LEFT JOIN ( \
                 SELECT dept_id, COUNT(DISTINCT manager_id) AS manager_count \
                 FROM employee_details \
                 WHERE manager_id IS NOT NULL \
                 GROUP BY dept_id \
             ) mgr ON mgr.dept_id = d.id \
             ORDER BY d.name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Per-department revenue figure (`0` when absent), ordered by
    /// department name.
    pub async fn revenue_by_department(pool: &PgPool) -> Result<Vec<DeptMetric>, sqlx::Error> {
        sqlx::query_as::<_, DeptMetric>(
            "SELECT d.name AS dept_name, COALESCE(dr.revenue, 0)::FLOAT8 AS value \
             FROM departments d \
             LEFT JOIN department_revenue dr ON dr.dept_id = d.id \
             ORDER BY d.name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// The most recent feedback entries across the organisation with the
    /// employee's display name and department.
    pub async fn recent_feedback(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<FeedbackFeedItem>, sqlx::Error> {
        sqlx::query_as::<_, FeedbackFeedItem>(
            "SELECT f.id, \
                    COALESCE(u.first_name || ' ' || u.last_name, ed.user_id) AS emp_name, \
                    f.manager_id AS manager_name, \
                    d.name AS department, \
                    f.score::FLOAT8 AS score, \
                    f.comments AS feedback_text, \
                    f.created_at \
             FROM feedback f \
             INNER JOIN employee_details ed ON ed.id = f.emp_id \
             LEFT JOIN users u ON u.user_id = ed.user_id \
             LEFT JOIN departments d ON d.id = ed.dept_id \
             ORDER BY f.created_at DESC, f.id DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
