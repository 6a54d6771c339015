//! Repository for the `materials` table.

use sqlx::PgPool;

use crate::models::material::{CreateMaterial, Material, UpdateMaterial};

const COLUMNS: &str =
    "id, work_id, name, unit, unit_price, quantity, images, created_at, updated_at";

/// Provides CRUD operations for materials.
pub struct MaterialRepo;

impl MaterialRepo {
    /// Insert a new material. `quantity` defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateMaterial) -> Result<Material, sqlx::Error> {
        let query = format!(
            "INSERT INTO materials (id, work_id, name, unit, unit_price, quantity, images)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(crate::new_id())
            .bind(&input.work_id)
            .bind(&input.name)
            .bind(&input.unit)
            .bind(input.unit_price)
            .bind(input.quantity)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials WHERE id = $1");
        sqlx::query_as::<_, Material>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all materials ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials ORDER BY name");
        sqlx::query_as::<_, Material>(&query).fetch_all(pool).await
    }

    /// List the materials stocked for one work, ordered by name.
    pub async fn list_by_work(pool: &PgPool, work_id: &str) -> Result<Vec<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials WHERE work_id = $1 ORDER BY name");
        sqlx::query_as::<_, Material>(&query)
            .bind(work_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateMaterial,
    ) -> Result<Option<Material>, sqlx::Error> {
        let query = format!(
            "UPDATE materials SET
                work_id = COALESCE($2, work_id),
                name = COALESCE($3, name),
                unit = COALESCE($4, unit),
                unit_price = COALESCE($5, unit_price),
                quantity = COALESCE($6, quantity),
                images = COALESCE($7, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(id)
            .bind(&input.work_id)
            .bind(&input.name)
            .bind(&input.unit)
            .bind(input.unit_price)
            .bind(input.quantity)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Delete a material. Orders referencing it keep existing without one.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
