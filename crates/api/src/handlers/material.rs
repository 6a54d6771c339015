//! Handlers for the `/materials` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::material::{CreateMaterial, Material, UpdateMaterial};
use buildtrack_db::repositories::MaterialRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::WorkFilterParams;
use crate::state::AppState;

/// POST /api/v1/materials
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMaterial>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let material = MaterialRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(material_id = %material.id, "Material created");
    Ok((StatusCode::CREATED, Json(material.normalized())))
}

/// GET /api/v1/materials?workId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WorkFilterParams>,
) -> AppResult<Json<Vec<Material>>> {
    let rows = match params.work_id.as_deref() {
        Some(work_id) => MaterialRepo::list_by_work(&state.pool, work_id).await?,
        None => MaterialRepo::list(&state.pool).await?,
    };
    Ok(Json(normalize_all(rows)))
}

/// GET /api/v1/materials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Material>> {
    let material = normalize(MaterialRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("Material", id))?;
    Ok(Json(material))
}

/// PUT /api/v1/materials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateMaterial>,
) -> AppResult<Json<Material>> {
    let material = normalize(MaterialRepo::update(&state.pool, &id, &denormalize(input)).await?)
        .ok_or_else(|| CoreError::not_found("Material", id))?;
    Ok(Json(material))
}

/// DELETE /api/v1/materials/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if MaterialRepo::delete(&state.pool, &id).await? {
        tracing::info!(material_id = %id, "Material deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Material", id).into())
    }
}
