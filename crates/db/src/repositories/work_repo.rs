//! Repository for the `works` table.

use sqlx::PgPool;

use crate::models::work::{CreateWork, UpdateWork, Work};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, client_name, status, start_date, end_date, \
    budget, images, team_ids, created_at, updated_at";

/// Provides CRUD operations for construction works.
pub struct WorkRepo;

impl WorkRepo {
    /// Insert a new work, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `planned`.
    pub async fn create(pool: &PgPool, input: &CreateWork) -> Result<Work, sqlx::Error> {
        let query = format!(
            "INSERT INTO works
                (id, name, address, client_name, status, start_date, end_date,
                 budget, images, team_ids)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'planned'), $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(crate::new_id())
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.client_name)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(&input.images)
            .bind(&input.team_ids)
            .fetch_one(pool)
            .await
    }

    /// Find a work by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE id = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all works ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works ORDER BY created_at DESC");
        sqlx::query_as::<_, Work>(&query).fetch_all(pool).await
    }

    /// Update a work. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateWork,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE works SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                client_name = COALESCE($4, client_name),
                status = COALESCE($5, status),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                budget = COALESCE($8, budget),
                images = COALESCE($9, images),
                team_ids = COALESCE($10, team_ids)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.client_name)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(&input.images)
            .bind(&input.team_ids)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work by ID. Tasks, logs, finance records and materials of the
    /// work are removed by cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
