//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, password_hash, role, first_name, last_name, email, \
                       created_at, updated_at";

/// Name of the unique constraint on `users.user_id`.
pub const UQ_USER_ID: &str = "uq_users_user_id";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate `user_id` fails with a unique violation on [`UQ_USER_ID`].
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_id, password_hash, role, first_name, last_name, email)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.user_id)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a user by login identifier (case-sensitive).
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by login identifier.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY user_id ASC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Update names and role, and the password hash when one is supplied.
    ///
    /// Returns `None` if no row with the given `user_id` exists.
    pub async fn update(
        pool: &PgPool,
        user_id: &str,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                first_name = $2,
                last_name = $3,
                role = $4,
                password_hash = COALESCE($5, password_hash)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.role)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a user. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
