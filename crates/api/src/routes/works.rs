//! Route definitions for construction works.

use axum::routing::get;
use axum::Router;

use crate::handlers::work;
use crate::state::AppState;

/// Work routes.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{work_id}/tasks    -> list_tasks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work::list).post(work::create))
        .route(
            "/{id}",
            get(work::get_by_id).put(work::update).delete(work::delete),
        )
        .route("/{work_id}/tasks", get(work::list_tasks))
}
