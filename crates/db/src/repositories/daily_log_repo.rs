//! Repository for the `daily_logs` table.

use sqlx::PgPool;

use crate::models::daily_log::{CreateDailyLog, DailyLog, UpdateDailyLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, work_id, author_id, log_date, weather, content, images, \
    team_ids, created_at, updated_at";

/// Provides CRUD operations for daily site logs.
pub struct DailyLogRepo;

impl DailyLogRepo {
    /// Insert a new log entry. `log_date` defaults to the current date.
    pub async fn create(pool: &PgPool, input: &CreateDailyLog) -> Result<DailyLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_logs
                (id, work_id, author_id, log_date, weather, content, images, team_ids)
             VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE), $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(crate::new_id())
            .bind(&input.work_id)
            .bind(&input.author_id)
            .bind(input.log_date)
            .bind(&input.weather)
            .bind(&input.content)
            .bind(&input.images)
            .bind(&input.team_ids)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<DailyLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM daily_logs WHERE id = $1");
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all log entries, newest log date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<DailyLog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM daily_logs ORDER BY log_date DESC, created_at DESC");
        sqlx::query_as::<_, DailyLog>(&query).fetch_all(pool).await
    }

    /// List the log entries of one work, newest log date first.
    pub async fn list_by_work(pool: &PgPool, work_id: &str) -> Result<Vec<DailyLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_logs
             WHERE work_id = $1
             ORDER BY log_date DESC, created_at DESC"
        );
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(work_id)
            .fetch_all(pool)
            .await
    }

    /// Update a log entry. The owning work cannot be changed.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateDailyLog,
    ) -> Result<Option<DailyLog>, sqlx::Error> {
        let query = format!(
            "UPDATE daily_logs SET
                author_id = COALESCE($2, author_id),
                log_date = COALESCE($3, log_date),
                weather = COALESCE($4, weather),
                content = COALESCE($5, content),
                images = COALESCE($6, images),
                team_ids = COALESCE($7, team_ids)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(id)
            .bind(&input.author_id)
            .bind(input.log_date)
            .bind(&input.weather)
            .bind(&input.content)
            .bind(&input.images)
            .bind(&input.team_ids)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM daily_logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
