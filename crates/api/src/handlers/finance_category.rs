//! Handlers for the `/finance-categories` lookup resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::finance::{CreateFinanceCategory, FinanceCategory, UpdateFinanceCategory};
use buildtrack_db::repositories::FinanceCategoryRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/v1/finance-categories
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFinanceCategory>,
) -> AppResult<(StatusCode, Json<FinanceCategory>)> {
    let category = FinanceCategoryRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(category_id = %category.id, "Finance category created");
    Ok((StatusCode::CREATED, Json(category.normalized())))
}

/// GET /api/v1/finance-categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FinanceCategory>>> {
    let rows = FinanceCategoryRepo::list(&state.pool).await?;
    Ok(Json(normalize_all(rows)))
}

/// GET /api/v1/finance-categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<FinanceCategory>> {
    let category = normalize(FinanceCategoryRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("Finance category", id))?;
    Ok(Json(category))
}

/// PUT /api/v1/finance-categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateFinanceCategory>,
) -> AppResult<Json<FinanceCategory>> {
    let updated = FinanceCategoryRepo::update(&state.pool, &id, &denormalize(input)).await?;
    let category =
        normalize(updated).ok_or_else(|| CoreError::not_found("Finance category", id))?;
    Ok(Json(category))
}

/// DELETE /api/v1/finance-categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if FinanceCategoryRepo::delete(&state.pool, &id).await? {
        tracing::info!(category_id = %id, "Finance category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Finance category", id).into())
    }
}
