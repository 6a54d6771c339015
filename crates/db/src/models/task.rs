//! Task entity model and DTOs.

use buildtrack_core::json_field::JsonField;
use buildtrack_core::json_fields;
use buildtrack_core::types::{Date, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub work_id: Option<EntityId>,
    pub status_id: Option<EntityId>,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub due_date: Option<Date>,
    /// Assignees. Not checked against `users`; stale ids are kept as-is.
    pub team_ids: Option<JsonField>,
    pub images: Option<JsonField>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub work_id: Option<EntityId>,
    pub status_id: Option<EntityId>,
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `medium` if omitted.
    pub priority: Option<String>,
    pub due_date: Option<Date>,
    pub team_ids: Option<JsonField>,
    pub images: Option<JsonField>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub work_id: Option<EntityId>,
    pub status_id: Option<EntityId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Date>,
    pub team_ids: Option<JsonField>,
    pub images: Option<JsonField>,
}

json_fields!(Task { team_ids => "teamIds", images => "images" });
json_fields!(CreateTask { team_ids => "teamIds", images => "images" });
json_fields!(UpdateTask { team_ids => "teamIds", images => "images" });
