//! Handlers for the `/task-statuses` lookup resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::task_status::{CreateTaskStatus, TaskStatus, UpdateTaskStatus};
use buildtrack_db::repositories::TaskStatusRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/v1/task-statuses
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTaskStatus>,
) -> AppResult<(StatusCode, Json<TaskStatus>)> {
    let status = TaskStatusRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(status_id = %status.id, "Task status created");
    Ok((StatusCode::CREATED, Json(status.normalized())))
}

/// GET /api/v1/task-statuses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TaskStatus>>> {
    let rows = TaskStatusRepo::list(&state.pool).await?;
    Ok(Json(normalize_all(rows)))
}

/// GET /api/v1/task-statuses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<TaskStatus>> {
    let status = normalize(TaskStatusRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("Task status", id))?;
    Ok(Json(status))
}

/// PUT /api/v1/task-statuses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateTaskStatus>,
) -> AppResult<Json<TaskStatus>> {
    let status = normalize(TaskStatusRepo::update(&state.pool, &id, &denormalize(input)).await?)
        .ok_or_else(|| CoreError::not_found("Task status", id))?;
    Ok(Json(status))
}

/// DELETE /api/v1/task-statuses/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if TaskStatusRepo::delete(&state.pool, &id).await? {
        tracing::info!(status_id = %id, "Task status deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Task status", id).into())
    }
}
