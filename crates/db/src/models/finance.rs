//! Finance models and DTOs.
//!
//! Covers the finance categories lookup and the income/expense records
//! booked against a work.

use buildtrack_core::json_field::JsonField;
use buildtrack_core::json_fields;
use buildtrack_core::types::{Date, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `finance_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceCategory {
    pub id: EntityId,
    pub name: String,
    /// `income` or `expense`.
    pub kind: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `finance_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceRecord {
    pub id: EntityId,
    pub work_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub description: String,
    pub kind: String,
    pub amount: f64,
    pub record_date: Date,
    /// Receipts and invoices.
    pub images: Option<JsonField>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinanceCategory {
    pub name: String,
    /// Defaults to `expense` if omitted.
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFinanceCategory {
    pub name: Option<String>,
    pub kind: Option<String>,
}

/// DTO for booking a new finance record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinanceRecord {
    pub work_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub description: String,
    /// Defaults to `expense` if omitted.
    pub kind: Option<String>,
    pub amount: f64,
    /// Defaults to today if omitted.
    pub record_date: Option<Date>,
    pub images: Option<JsonField>,
}

/// DTO for partially updating a finance record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFinanceRecord {
    pub work_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub amount: Option<f64>,
    pub record_date: Option<Date>,
    pub images: Option<JsonField>,
}

json_fields!(FinanceCategory {});
json_fields!(CreateFinanceCategory {});
json_fields!(UpdateFinanceCategory {});
json_fields!(FinanceRecord { images => "images" });
json_fields!(CreateFinanceRecord { images => "images" });
json_fields!(UpdateFinanceRecord { images => "images" });
