//! Material order model and DTOs.
//!
//! An order collects supplier quotes as free-form line items; the shape of
//! each quote is not enforced.

use buildtrack_core::json_field::JsonField;
use buildtrack_core::json_fields;
use buildtrack_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `material_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOrder {
    pub id: EntityId,
    pub work_id: Option<EntityId>,
    pub material_id: Option<EntityId>,
    pub supplier: Option<String>,
    pub status: String,
    pub quantity: Option<f64>,
    pub requested_by: Option<EntityId>,
    /// Quote line items, e.g. `[{"item":"cement","qty":10}]`.
    pub quotes: Option<JsonField>,
    pub images: Option<JsonField>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for placing a new order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialOrder {
    pub work_id: Option<EntityId>,
    pub material_id: Option<EntityId>,
    pub supplier: Option<String>,
    /// Defaults to `requested` if omitted.
    pub status: Option<String>,
    pub quantity: Option<f64>,
    pub requested_by: Option<EntityId>,
    pub quotes: Option<JsonField>,
    pub images: Option<JsonField>,
}

/// DTO for updating an order. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterialOrder {
    pub work_id: Option<EntityId>,
    pub material_id: Option<EntityId>,
    pub supplier: Option<String>,
    pub status: Option<String>,
    pub quantity: Option<f64>,
    pub requested_by: Option<EntityId>,
    pub quotes: Option<JsonField>,
    pub images: Option<JsonField>,
}

json_fields!(MaterialOrder { quotes => "quotes", images => "images" });
json_fields!(CreateMaterialOrder { quotes => "quotes", images => "images" });
json_fields!(UpdateMaterialOrder { quotes => "quotes", images => "images" });
