//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `buildtrack_db` and wrap every storage call
//! with the normalization layer: request DTOs are denormalized before they
//! are written, rows are normalized before they are returned.

pub mod daily_log;
pub mod finance_category;
pub mod finance_record;
pub mod material;
pub mod material_order;
pub mod task;
pub mod task_status;
pub mod user;
pub mod user_profile;
pub mod work;
