//! Route definitions for tasks and the task status catalogue.

use axum::routing::get;
use axum::Router;

use crate::handlers::{task, task_status};
use crate::state::AppState;

/// Task routes: list, create, get, update, delete.
pub fn tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
}

/// Task status routes.
pub fn statuses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(task_status::list).post(task_status::create))
        .route(
            "/{id}",
            get(task_status::get_by_id).put(task_status::update).delete(task_status::delete),
        )
}
