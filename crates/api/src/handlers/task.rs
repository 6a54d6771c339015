//! Handlers for the `/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::task::{CreateTask, Task, UpdateTask};
use buildtrack_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::WorkFilterParams;
use crate::state::AppState;

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(task_id = %task.id, work_id = ?task.work_id, "Task created");
    Ok((StatusCode::CREATED, Json(task.normalized())))
}

/// GET /api/v1/tasks?workId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WorkFilterParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = match params.work_id.as_deref() {
        Some(work_id) => TaskRepo::list_by_work(&state.pool, work_id).await?,
        None => TaskRepo::list(&state.pool).await?,
    };
    Ok(Json(normalize_all(tasks)))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Task>> {
    let task = normalize(TaskRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("Task", id))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = normalize(TaskRepo::update(&state.pool, &id, &denormalize(input)).await?)
        .ok_or_else(|| CoreError::not_found("Task", id))?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, &id).await? {
        tracing::info!(task_id = %id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Task", id).into())
    }
}
