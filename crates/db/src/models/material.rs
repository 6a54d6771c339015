//! Material (stock item) model and DTOs.

use buildtrack_core::json_field::JsonField;
use buildtrack_core::json_fields;
use buildtrack_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `materials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: EntityId,
    pub work_id: Option<EntityId>,
    pub name: String,
    /// Unit of measure, e.g. `bag`, `m3`.
    pub unit: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: f64,
    pub images: Option<JsonField>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterial {
    pub work_id: Option<EntityId>,
    pub name: String,
    pub unit: Option<String>,
    pub unit_price: Option<f64>,
    /// Defaults to 0 if omitted.
    pub quantity: Option<f64>,
    pub images: Option<JsonField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterial {
    pub work_id: Option<EntityId>,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub images: Option<JsonField>,
}

json_fields!(Material { images => "images" });
json_fields!(CreateMaterial { images => "images" });
json_fields!(UpdateMaterial { images => "images" });
