//! Permission profile model and DTOs.
//!
//! A profile is a named bundle of permissions (e.g. "Site engineer") that
//! users can be attached to.

use buildtrack_core::json_field::JsonField;
use buildtrack_core::json_fields;
use buildtrack_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Option<JsonField>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserProfile {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Option<JsonField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfile {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<JsonField>,
}

json_fields!(UserProfile { permissions => "permissions" });
json_fields!(CreateUserProfile { permissions => "permissions" });
json_fields!(UpdateUserProfile { permissions => "permissions" });
