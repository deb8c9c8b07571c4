//! Repository for the append-only `feedback` table.
//!
//! Entries are never updated or deleted.

use epms_core::feedback::NewFeedback;
use epms_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::Feedback;

/// Column list shared across queries. `score` is `NUMERIC(4,2)` in the table.
const COLUMNS: &str = "id, emp_id, manager_id, score::FLOAT8 AS score, comments, created_at";

/// Provides append and read operations for feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Append a feedback entry, returning the stored row.
    ///
    /// Fails with a foreign key violation if `emp_id` has no employee record.
    pub async fn create(pool: &PgPool, input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (emp_id, manager_id, score, comments)
             VALUES ($1, $2, ROUND($3::NUMERIC, 2), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.emp_id)
            .bind(&input.manager_id)
            .bind(input.score)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }

    /// The most recent entry for an employee. Ties on `created_at` go to the
    /// higher ID.
    pub async fn latest_for_employee(
        pool: &PgPool,
        emp_id: DbId,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback WHERE emp_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT 1"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(emp_id)
            .fetch_optional(pool)
            .await
    }

    /// All entries for one employee, newest first.
    pub async fn list_for_employee(
        pool: &PgPool,
        emp_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback WHERE emp_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(emp_id)
            .fetch_all(pool)
            .await
    }

    /// All entries for a set of employees, newest first.
    ///
    /// An empty set returns an empty list without touching the database.
    pub async fn list_for_employees(
        pool: &PgPool,
        emp_ids: &[DbId],
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        if emp_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM feedback WHERE emp_id = ANY($1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(emp_ids)
            .fetch_all(pool)
            .await
    }
}
