//! Route definitions for the finance ledger.
//!
//! Mounted at `/finance` and `/finance-categories` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{finance_category, finance_record};
use crate::state::AppState;

/// Finance record routes: list, create, get, update, delete.
pub fn records_router() -> Router<AppState> {
    Router::new()
        .route("/", get(finance_record::list).post(finance_record::create))
        .route(
            "/{id}",
            get(finance_record::get_by_id)
                .put(finance_record::update)
                .delete(finance_record::delete),
        )
}

/// Finance category routes.
pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(finance_category::list).post(finance_category::create))
        .route(
            "/{id}",
            get(finance_category::get_by_id)
                .put(finance_category::update)
                .delete(finance_category::delete),
        )
}
