//! Route definitions for materials and purchase orders.

use axum::routing::get;
use axum::Router;

use crate::handlers::{material, material_order};
use crate::state::AppState;

/// Material routes: list, create, get, update, delete.
pub fn materials_router() -> Router<AppState> {
    Router::new()
        .route("/", get(material::list).post(material::create))
        .route(
            "/{id}",
            get(material::get_by_id).put(material::update).delete(material::delete),
        )
}

/// Material order routes.
pub fn orders_router() -> Router<AppState> {
    Router::new()
        .route("/", get(material_order::list).post(material_order::create))
        .route(
            "/{id}",
            get(material_order::get_by_id)
                .put(material_order::update)
                .delete(material_order::delete),
        )
}
