//! Repository for the `material_orders` table.

use sqlx::PgPool;

use crate::models::material_order::{CreateMaterialOrder, MaterialOrder, UpdateMaterialOrder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, work_id, material_id, supplier, status, quantity, requested_by, \
    quotes, images, created_at, updated_at";

/// Provides CRUD operations for material orders.
pub struct MaterialOrderRepo;

impl MaterialOrderRepo {
    /// Insert a new order. `status` defaults to `requested`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaterialOrder,
    ) -> Result<MaterialOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO material_orders
                (id, work_id, material_id, supplier, status, quantity, requested_by, quotes, images)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'requested'), $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialOrder>(&query)
            .bind(crate::new_id())
            .bind(&input.work_id)
            .bind(&input.material_id)
            .bind(&input.supplier)
            .bind(&input.status)
            .bind(input.quantity)
            .bind(&input.requested_by)
            .bind(&input.quotes)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<MaterialOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM material_orders WHERE id = $1");
        sqlx::query_as::<_, MaterialOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all orders ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MaterialOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM material_orders ORDER BY created_at DESC");
        sqlx::query_as::<_, MaterialOrder>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the orders placed for one work.
    pub async fn list_by_work(
        pool: &PgPool,
        work_id: &str,
    ) -> Result<Vec<MaterialOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM material_orders WHERE work_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MaterialOrder>(&query)
            .bind(work_id)
            .fetch_all(pool)
            .await
    }

    /// Update an order. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateMaterialOrder,
    ) -> Result<Option<MaterialOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE material_orders SET
                work_id = COALESCE($2, work_id),
                material_id = COALESCE($3, material_id),
                supplier = COALESCE($4, supplier),
                status = COALESCE($5, status),
                quantity = COALESCE($6, quantity),
                requested_by = COALESCE($7, requested_by),
                quotes = COALESCE($8, quotes),
                images = COALESCE($9, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialOrder>(&query)
            .bind(id)
            .bind(&input.work_id)
            .bind(&input.material_id)
            .bind(&input.supplier)
            .bind(&input.status)
            .bind(input.quantity)
            .bind(&input.requested_by)
            .bind(&input.quotes)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM material_orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
