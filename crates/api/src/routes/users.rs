//! Route definitions for users and permission profiles.
//!
//! Mounted at `/users` and `/profiles` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{user, user_profile};
use crate::state::AppState;

/// User routes: list, create, get, update, delete.
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route(
            "/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}

/// Permission profile routes.
pub fn profiles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(user_profile::list).post(user_profile::create))
        .route(
            "/{id}",
            get(user_profile::get_by_id).put(user_profile::update).delete(user_profile::delete),
        )
}
