//! Handlers for the `/finance` resource (income and expense records).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::finance::{CreateFinanceRecord, FinanceRecord, UpdateFinanceRecord};
use buildtrack_db::repositories::FinanceRecordRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::WorkFilterParams;
use crate::state::AppState;

/// POST /api/v1/finance
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFinanceRecord>,
) -> AppResult<(StatusCode, Json<FinanceRecord>)> {
    let record = FinanceRecordRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(record_id = %record.id, "Finance record created");
    Ok((StatusCode::CREATED, Json(record.normalized())))
}

/// GET /api/v1/finance?workId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WorkFilterParams>,
) -> AppResult<Json<Vec<FinanceRecord>>> {
    let rows = match params.work_id.as_deref() {
        Some(work_id) => FinanceRecordRepo::list_by_work(&state.pool, work_id).await?,
        None => FinanceRecordRepo::list(&state.pool).await?,
    };
    Ok(Json(normalize_all(rows)))
}

/// GET /api/v1/finance/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<FinanceRecord>> {
    let record = normalize(FinanceRecordRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("Finance record", id))?;
    Ok(Json(record))
}

/// PUT /api/v1/finance/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateFinanceRecord>,
) -> AppResult<Json<FinanceRecord>> {
    let record = normalize(FinanceRecordRepo::update(&state.pool, &id, &denormalize(input)).await?)
        .ok_or_else(|| CoreError::not_found("Finance record", id))?;
    Ok(Json(record))
}

/// DELETE /api/v1/finance/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if FinanceRecordRepo::delete(&state.pool, &id).await? {
        tracing::info!(record_id = %id, "Finance record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Finance record", id).into())
    }
}
