//! Repository for the `finance_records` table.

use sqlx::PgPool;

use crate::models::finance::{CreateFinanceRecord, FinanceRecord, UpdateFinanceRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, work_id, category_id, description, kind, amount, record_date, \
    images, created_at, updated_at";

/// Provides CRUD operations for income and expense records.
pub struct FinanceRecordRepo;

impl FinanceRecordRepo {
    /// Insert a new record. `kind` defaults to `expense` and `record_date`
    /// to the current date.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFinanceRecord,
    ) -> Result<FinanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO finance_records
                (id, work_id, category_id, description, kind, amount, record_date, images)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'expense'), $6, COALESCE($7, CURRENT_DATE), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FinanceRecord>(&query)
            .bind(crate::new_id())
            .bind(&input.work_id)
            .bind(&input.category_id)
            .bind(&input.description)
            .bind(&input.kind)
            .bind(input.amount)
            .bind(input.record_date)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find a record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<FinanceRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM finance_records WHERE id = $1");
        sqlx::query_as::<_, FinanceRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all records, most recent booking date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<FinanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM finance_records ORDER BY record_date DESC, created_at DESC"
        );
        sqlx::query_as::<_, FinanceRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the records booked against one work.
    pub async fn list_by_work(
        pool: &PgPool,
        work_id: &str,
    ) -> Result<Vec<FinanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM finance_records
             WHERE work_id = $1
             ORDER BY record_date DESC, created_at DESC"
        );
        sqlx::query_as::<_, FinanceRecord>(&query)
            .bind(work_id)
            .fetch_all(pool)
            .await
    }

    /// Update a record. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateFinanceRecord,
    ) -> Result<Option<FinanceRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE finance_records SET
                work_id = COALESCE($2, work_id),
                category_id = COALESCE($3, category_id),
                description = COALESCE($4, description),
                kind = COALESCE($5, kind),
                amount = COALESCE($6, amount),
                record_date = COALESCE($7, record_date),
                images = COALESCE($8, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FinanceRecord>(&query)
            .bind(id)
            .bind(&input.work_id)
            .bind(&input.category_id)
            .bind(&input.description)
            .bind(&input.kind)
            .bind(input.amount)
            .bind(input.record_date)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Delete a record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM finance_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
