//! Repository for the `task_statuses` lookup table.

use sqlx::PgPool;

use crate::models::task_status::{CreateTaskStatus, TaskStatus, UpdateTaskStatus};

const COLUMNS: &str = "id, name, color, sort_order, created_at, updated_at";

pub struct TaskStatusRepo;

impl TaskStatusRepo {
    pub async fn create(pool: &PgPool, input: &CreateTaskStatus) -> Result<TaskStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_statuses (id, name, color, sort_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskStatus>(&query)
            .bind(crate::new_id())
            .bind(&input.name)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<TaskStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_statuses WHERE id = $1");
        sqlx::query_as::<_, TaskStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List statuses in board order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaskStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_statuses ORDER BY sort_order, name");
        sqlx::query_as::<_, TaskStatus>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateTaskStatus,
    ) -> Result<Option<TaskStatus>, sqlx::Error> {
        let query = format!(
            "UPDATE task_statuses SET
                name = COALESCE($2, name),
                color = COALESCE($3, color),
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskStatus>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a status. Tasks using it fall back to no status.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM task_statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
