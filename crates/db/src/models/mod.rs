//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Structs with JSON-encoded columns declare them with
//! [`json_fields!`](buildtrack_core::json_fields) so the normalization layer
//! knows exactly which fields to decode and encode.

pub mod daily_log;
pub mod finance;
pub mod material;
pub mod material_order;
pub mod task;
pub mod task_status;
pub mod user;
pub mod user_profile;
pub mod work;
