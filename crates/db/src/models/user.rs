//! User entity model and DTOs.

use buildtrack_core::json_field::JsonField;
use buildtrack_core::json_fields;
use buildtrack_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub profile_id: Option<EntityId>,
    pub is_active: bool,
    /// Per-user permissions, on top of those granted by the profile.
    pub permissions: Option<JsonField>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Defaults to `member` if omitted.
    pub role: Option<String>,
    pub profile_id: Option<EntityId>,
    pub is_active: Option<bool>,
    pub permissions: Option<JsonField>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub profile_id: Option<EntityId>,
    pub is_active: Option<bool>,
    pub permissions: Option<JsonField>,
}

json_fields!(User { permissions => "permissions" });
json_fields!(CreateUser { permissions => "permissions" });
json_fields!(UpdateUser { permissions => "permissions" });
