//! Repository for the `finance_categories` lookup table.

use sqlx::PgPool;

use crate::models::finance::{CreateFinanceCategory, FinanceCategory, UpdateFinanceCategory};

const COLUMNS: &str = "id, name, kind, created_at, updated_at";

pub struct FinanceCategoryRepo;

impl FinanceCategoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateFinanceCategory,
    ) -> Result<FinanceCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO finance_categories (id, name, kind)
             VALUES ($1, $2, COALESCE($3, 'expense'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FinanceCategory>(&query)
            .bind(crate::new_id())
            .bind(&input.name)
            .bind(&input.kind)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<FinanceCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM finance_categories WHERE id = $1");
        sqlx::query_as::<_, FinanceCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<FinanceCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM finance_categories ORDER BY kind, name");
        sqlx::query_as::<_, FinanceCategory>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateFinanceCategory,
    ) -> Result<Option<FinanceCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE finance_categories SET
                name = COALESCE($2, name),
                kind = COALESCE($3, kind)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FinanceCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM finance_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
