//! Repository for the `departments` and `department_revenue` tables.

use epms_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::Department;

/// Name of the unique constraint on `departments.name`.
pub const UQ_DEPARTMENT_NAME: &str = "uq_departments_name";

/// Provides operations on departments and their revenue figures.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a department, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Department, sqlx::Error> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// List all departments ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    /// Set a department's revenue figure, replacing any previous value.
    ///
    /// Fails with a foreign key violation if the department does not exist.
    pub async fn set_revenue(
        pool: &PgPool,
        dept_id: DbId,
        revenue: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO department_revenue (dept_id, revenue) \
             VALUES ($1, ROUND($2::NUMERIC, 2)) \
             ON CONFLICT (dept_id) DO UPDATE SET revenue = EXCLUDED.revenue",
        )
        .bind(dept_id)
        .bind(revenue)
        .execute(pool)
        .await?;
        Ok(())
    }
}
