//! Construction work entity model and DTOs.

use buildtrack_core::json_field::JsonField;
use buildtrack_core::json_fields;
use buildtrack_core::types::{Date, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `works` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: EntityId,
    pub name: String,
    pub address: Option<String>,
    pub client_name: Option<String>,
    pub status: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    /// Site photos and drawings.
    pub images: Option<JsonField>,
    /// Users assigned to the work.
    pub team_ids: Option<JsonField>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new work.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWork {
    pub name: String,
    pub address: Option<String>,
    pub client_name: Option<String>,
    /// Defaults to `planned` if omitted.
    pub status: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    pub images: Option<JsonField>,
    pub team_ids: Option<JsonField>,
}

/// DTO for updating an existing work. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWork {
    pub name: Option<String>,
    pub address: Option<String>,
    pub client_name: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    pub images: Option<JsonField>,
    pub team_ids: Option<JsonField>,
}

json_fields!(Work { images => "images", team_ids => "teamIds" });
json_fields!(CreateWork { images => "images", team_ids => "teamIds" });
json_fields!(UpdateWork { images => "images", team_ids => "teamIds" });
