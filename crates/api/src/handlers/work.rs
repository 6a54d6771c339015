//! Handlers for the `/works` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::task::Task;
use buildtrack_db::models::work::{CreateWork, UpdateWork, Work};
use buildtrack_db::repositories::{TaskRepo, WorkRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/v1/works
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateWork>,
) -> AppResult<(StatusCode, Json<Work>)> {
    let work = WorkRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(work_id = %work.id, name = %work.name, "Work created");
    Ok((StatusCode::CREATED, Json(work.normalized())))
}

/// GET /api/v1/works
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Work>>> {
    let works = WorkRepo::list(&state.pool).await?;
    Ok(Json(normalize_all(works)))
}

/// GET /api/v1/works/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Work>> {
    let work = normalize(WorkRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("Work", id))?;
    Ok(Json(work))
}

/// PUT /api/v1/works/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateWork>,
) -> AppResult<Json<Work>> {
    let work = normalize(WorkRepo::update(&state.pool, &id, &denormalize(input)).await?)
        .ok_or_else(|| CoreError::not_found("Work", id))?;
    Ok(Json(work))
}

/// DELETE /api/v1/works/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if WorkRepo::delete(&state.pool, &id).await? {
        tracing::info!(work_id = %id, "Work deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Work", id).into())
    }
}

/// GET /api/v1/works/{work_id}/tasks
///
/// Returns 404 if the work itself does not exist, so an empty list always
/// means "no tasks yet".
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(work_id): Path<EntityId>,
) -> AppResult<Json<Vec<Task>>> {
    if WorkRepo::find_by_id(&state.pool, &work_id).await?.is_none() {
        return Err(CoreError::not_found("Work", work_id).into());
    }
    let tasks = TaskRepo::list_by_work(&state.pool, &work_id).await?;
    Ok(Json(normalize_all(tasks)))
}
