//! Repository for the `user_profiles` table.

use sqlx::PgPool;

use crate::models::user_profile::{CreateUserProfile, UpdateUserProfile, UserProfile};

const COLUMNS: &str = "id, name, description, permissions, created_at, updated_at";

/// Provides CRUD operations for permission profiles.
pub struct UserProfileRepo;

impl UserProfileRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateUserProfile,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (id, name, description, permissions)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(crate::new_id())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.permissions)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all profiles ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles ORDER BY name");
        sqlx::query_as::<_, UserProfile>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateUserProfile,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                permissions = COALESCE($4, permissions)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.permissions)
            .fetch_optional(pool)
            .await
    }

    /// Delete a profile. Users attached to it keep existing with no profile.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
