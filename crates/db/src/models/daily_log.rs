//! Daily site log model and DTOs.

use buildtrack_core::json_field::JsonField;
use buildtrack_core::json_fields;
use buildtrack_core::types::{Date, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `daily_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: EntityId,
    pub work_id: EntityId,
    pub author_id: Option<EntityId>,
    pub log_date: Date,
    pub weather: Option<String>,
    pub content: String,
    pub images: Option<JsonField>,
    /// Crew present on site that day.
    pub team_ids: Option<JsonField>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new log entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyLog {
    pub work_id: EntityId,
    pub author_id: Option<EntityId>,
    /// Defaults to today if omitted.
    pub log_date: Option<Date>,
    pub weather: Option<String>,
    pub content: String,
    pub images: Option<JsonField>,
    pub team_ids: Option<JsonField>,
}

/// DTO for updating a log entry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDailyLog {
    pub author_id: Option<EntityId>,
    pub log_date: Option<Date>,
    pub weather: Option<String>,
    pub content: Option<String>,
    pub images: Option<JsonField>,
    pub team_ids: Option<JsonField>,
}

json_fields!(DailyLog { images => "images", team_ids => "teamIds" });
json_fields!(CreateDailyLog { images => "images", team_ids => "teamIds" });
json_fields!(UpdateDailyLog { images => "images", team_ids => "teamIds" });
