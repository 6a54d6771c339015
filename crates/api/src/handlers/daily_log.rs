//! Handlers for the `/logs` resource (daily site logs).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::daily_log::{CreateDailyLog, DailyLog, UpdateDailyLog};
use buildtrack_db::repositories::DailyLogRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::WorkFilterParams;
use crate::state::AppState;

/// POST /api/v1/logs
///
/// `workId` is required; an unknown work surfaces as 409 from the foreign key.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDailyLog>,
) -> AppResult<(StatusCode, Json<DailyLog>)> {
    let log = DailyLogRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(log_id = %log.id, "Daily log created");
    Ok((StatusCode::CREATED, Json(log.normalized())))
}

/// GET /api/v1/logs?workId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WorkFilterParams>,
) -> AppResult<Json<Vec<DailyLog>>> {
    let rows = match params.work_id.as_deref() {
        Some(work_id) => DailyLogRepo::list_by_work(&state.pool, work_id).await?,
        None => DailyLogRepo::list(&state.pool).await?,
    };
    Ok(Json(normalize_all(rows)))
}

/// GET /api/v1/logs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DailyLog>> {
    let log = normalize(DailyLogRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("Daily log", id))?;
    Ok(Json(log))
}

/// PUT /api/v1/logs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateDailyLog>,
) -> AppResult<Json<DailyLog>> {
    let log = normalize(DailyLogRepo::update(&state.pool, &id, &denormalize(input)).await?)
        .ok_or_else(|| CoreError::not_found("Daily log", id))?;
    Ok(Json(log))
}

/// DELETE /api/v1/logs/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if DailyLogRepo::delete(&state.pool, &id).await? {
        tracing::info!(log_id = %id, "Daily log deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Daily log", id).into())
    }
}
