pub mod finance;
pub mod health;
pub mod logs;
pub mod materials;
pub mod tasks;
pub mod users;
pub mod works;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /works                         list, create
/// /works/{id}                    get, update, delete
/// /works/{work_id}/tasks         tasks of one work
///
/// /users                         list, create
/// /users/{id}                    get, update, delete
/// /profiles                      list, create
/// /profiles/{id}                 get, update, delete
///
/// /tasks                         list (?workId), create
/// /tasks/{id}                    get, update, delete
/// /task-statuses                 list, create
/// /task-statuses/{id}            get, update, delete
///
/// /finance                       list (?workId), create
/// /finance/{id}                  get, update, delete
/// /finance-categories            list, create
/// /finance-categories/{id}       get, update, delete
///
/// /logs                          list (?workId), create
/// /logs/{id}                     get, update, delete
///
/// /materials                     list (?workId), create
/// /materials/{id}                get, update, delete
/// /material-orders               list (?workId), create
/// /material-orders/{id}          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/works", works::router())
        .nest("/users", users::users_router())
        .nest("/profiles", users::profiles_router())
        .nest("/tasks", tasks::tasks_router())
        .nest("/task-statuses", tasks::statuses_router())
        .nest("/finance", finance::records_router())
        .nest("/finance-categories", finance::categories_router())
        .nest("/logs", logs::router())
        .nest("/materials", materials::materials_router())
        .nest("/material-orders", materials::orders_router())
}
