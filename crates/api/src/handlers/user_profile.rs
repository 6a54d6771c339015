//! Handlers for the `/profiles` resource (permission profiles).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use buildtrack_core::error::CoreError;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all, JsonFields};
use buildtrack_core::types::EntityId;
use buildtrack_db::models::user_profile::{CreateUserProfile, UserProfile, UpdateUserProfile};
use buildtrack_db::repositories::UserProfileRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/v1/profiles
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUserProfile>,
) -> AppResult<(StatusCode, Json<UserProfile>)> {
    let profile = UserProfileRepo::create(&state.pool, &denormalize(input)).await?;
    tracing::info!(profile_id = %profile.id, "User profile created");
    Ok((StatusCode::CREATED, Json(profile.normalized())))
}

/// GET /api/v1/profiles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserProfile>>> {
    let rows = UserProfileRepo::list(&state.pool).await?;
    Ok(Json(normalize_all(rows)))
}

/// GET /api/v1/profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<UserProfile>> {
    let profile = normalize(UserProfileRepo::find_by_id(&state.pool, &id).await?)
        .ok_or_else(|| CoreError::not_found("User profile", id))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profiles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateUserProfile>,
) -> AppResult<Json<UserProfile>> {
    let profile = normalize(UserProfileRepo::update(&state.pool, &id, &denormalize(input)).await?)
        .ok_or_else(|| CoreError::not_found("User profile", id))?;
    Ok(Json(profile))
}

/// DELETE /api/v1/profiles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if UserProfileRepo::delete(&state.pool, &id).await? {
        tracing::info!(profile_id = %id, "User profile deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("User profile", id).into())
    }
}
