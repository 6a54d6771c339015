//! Handlers for the `/material-orders` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::material_order::{
    CreateMaterialOrder, MaterialOrder, UpdateMaterialOrder,
};
use buildtrack_db::repositories::MaterialOrderRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::WorkFilterParams;
use crate::state::AppState;

/// POST /api/v1/material-orders
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMaterialOrder>,
) -> AppResult<(StatusCode, Json<MaterialOrder>)> {
    let order = MaterialOrderRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(order_id = %order.id, "Material order created");
    Ok((StatusCode::CREATED, Json(order.normalized())))
}

/// GET /api/v1/material-orders?workId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WorkFilterParams>,
) -> AppResult<Json<Vec<MaterialOrder>>> {
    let rows = match params.work_id.as_deref() {
        Some(work_id) => MaterialOrderRepo::list_by_work(&state.pool, work_id).await?,
        None => MaterialOrderRepo::list(&state.pool).await?,
    };
    Ok(Json(normalize_all(rows)))
}

/// GET /api/v1/material-orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<MaterialOrder>> {
    let order = normalize(MaterialOrderRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("Material order", id))?;
    Ok(Json(order))
}

/// PUT /api/v1/material-orders/{id}
///
/// `quotes` replaces the whole quote list; there is no per-line merge.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateMaterialOrder>,
) -> AppResult<Json<MaterialOrder>> {
    let order = normalize(MaterialOrderRepo::update(&state.pool, &id, &denormalize(input)).await?)
        .ok_or_else(|| CoreError::not_found("Material order", id))?;
    Ok(Json(order))
}

/// DELETE /api/v1/material-orders/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if MaterialOrderRepo::delete(&state.pool, &id).await? {
        tracing::info!(order_id = %id, "Material order deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Material order", id).into())
    }
}
