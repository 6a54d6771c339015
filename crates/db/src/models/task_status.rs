//! Task status lookup model and DTOs.

use buildtrack_core::json_fields;
use buildtrack_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `task_statuses` table (e.g. "To do", "In progress").
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    pub id: EntityId,
    pub name: String,
    /// Display color for board columns, e.g. `#f59e0b`.
    pub color: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskStatus {
    pub name: String,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatus {
    pub name: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

json_fields!(TaskStatus {});
json_fields!(CreateTaskStatus {});
json_fields!(UpdateTaskStatus {});
