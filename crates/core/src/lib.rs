//! Domain types shared by the storage and HTTP layers.
//!
//! The interesting part lives in [`json_field`] and [`normalize`]: structured
//! entity fields are persisted as JSON text and exposed to API callers as
//! decoded JSON values.

pub mod error;
pub mod json_field;
pub mod normalize;
pub mod types;
