use axum::routing::get;
use axum::Router;

use crate::handlers::daily_log;
use crate::state::AppState;

/// Daily log routes. `GET /` accepts `?workId=`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(daily_log::list).post(daily_log::create))
        .route(
            "/{id}",
            get(daily_log::get_by_id)
                .put(daily_log::update)
                .delete(daily_log::delete),
        )
}
