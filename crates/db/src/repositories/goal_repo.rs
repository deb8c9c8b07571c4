//! Repository for the `goals` table.
//!
//! This is the only code that writes `goals.completion_percent` or
//! `goals.status`. Both write paths take a [`CompletionPercent`] and store
//! `percent.status()` alongside it, so the two columns cannot drift.

use epms_core::goals::{CompletionPercent, NewGoal};
use epms_core::types::DbId;
use sqlx::PgPool;

use crate::models::goal::Goal;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, emp_id, title, description, completion_percent, status, assigned_by, created_at";

/// Provides lifecycle operations for goals.
pub struct GoalRepo;

impl GoalRepo {
    /// Insert a goal at zero progress, returning the created row.
    ///
    /// Fails with a foreign key violation if `emp_id` has no employee record.
    pub async fn create(pool: &PgPool, input: &NewGoal) -> Result<Goal, sqlx::Error> {
        let progress = input.initial_progress();
        let query = format!(
            "INSERT INTO goals (emp_id, title, description, completion_percent, status, assigned_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(input.emp_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(progress.value())
            .bind(progress.status().as_str())
            .bind(&input.assigned_by)
            .fetch_one(pool)
            .await
    }

    /// Find a goal by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set progress and its derived status in one statement.
    ///
    /// Returns `None` if no goal with the given `id` exists.
    pub async fn update_progress(
        pool: &PgPool,
        id: DbId,
        percent: CompletionPercent,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET completion_percent = $2, status = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(percent.value())
            .bind(percent.status().as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a goal. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All goals for one employee, oldest first.
    pub async fn list_for_employee(
        pool: &PgPool,
        emp_id: DbId,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM goals WHERE emp_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(emp_id)
            .fetch_all(pool)
            .await
    }

    /// All goals for a set of employees, newest first.
    ///
    /// An empty set returns an empty list without touching the database.
    pub async fn list_for_employees(
        pool: &PgPool,
        emp_ids: &[DbId],
    ) -> Result<Vec<Goal>, sqlx::Error> {
        if emp_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM goals WHERE emp_id = ANY($1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(emp_ids)
            .fetch_all(pool)
            .await
    }
}
