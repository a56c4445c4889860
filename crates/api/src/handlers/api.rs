//! Handlers for the `/projects/{id}/apis` resource.
//!
//! Every route is scoped to its parent project: an unknown project is a 404
//! before anything else is looked at.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use baas_core::error::CoreError;
use baas_core::ids::ensure_lookup_id;
use baas_db::models::api::{CreateApi, UpdateApi};
use baas_db::repositories::ApiRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::project::ensure_project_exists;
use crate::response::{ApiItemResponse, ApiListResponse, MessageResponse};
use crate::state::AppState;

/// POST /baas/projects/{id}/apis
///
/// The body is parsed only after the project lookup succeeds, so a missing
/// project wins over a malformed body.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: Result<AppJson<CreateApi>, AppError>,
) -> AppResult<(StatusCode, Json<ApiItemResponse>)> {
    ensure_project_exists(&state.pool, &project_id).await?;

    let AppJson(input) = body?;
    input.validate()?;

    let api = ApiRepo::create(&state.pool, &project_id, &input).await?;
    tracing::info!(
        project_id = %project_id,
        api_id = %api.id,
        method = %api.method,
        path = %api.path,
        "API created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiItemResponse::with_message("API created successfully", api)),
    ))
}

/// GET /baas/projects/{id}/apis
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<ApiListResponse>> {
    ensure_project_exists(&state.pool, &project_id).await?;
    let apis = ApiRepo::list_by_project(&state.pool, &project_id).await?;
    Ok(Json(apis.into()))
}

/// GET /baas/projects/{id}/apis/{api_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, api_id)): Path<(String, String)>,
) -> AppResult<Json<ApiItemResponse>> {
    ensure_project_exists(&state.pool, &project_id).await?;
    ensure_lookup_id("API", &api_id)?;
    let api = ApiRepo::find_scoped(&state.pool, &project_id, &api_id)
        .await?
        .ok_or_else(|| CoreError::not_found("API", api_id))?;
    Ok(Json(ApiItemResponse::new(api)))
}

/// PUT /baas/projects/{id}/apis/{api_id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, api_id)): Path<(String, String)>,
    AppJson(input): AppJson<UpdateApi>,
) -> AppResult<Json<ApiItemResponse>> {
    ensure_project_exists(&state.pool, &project_id).await?;
    ensure_lookup_id("API", &api_id)?;
    let api = ApiRepo::update(&state.pool, &project_id, &api_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("API", api_id))?;
    tracing::info!(project_id = %project_id, api_id = %api.id, "API updated");

    Ok(Json(ApiItemResponse::with_message(
        "API updated successfully",
        api,
    )))
}

/// DELETE /baas/projects/{id}/apis/{api_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, api_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    ensure_project_exists(&state.pool, &project_id).await?;
    ensure_lookup_id("API", &api_id)?;
    if !ApiRepo::delete_scoped(&state.pool, &project_id, &api_id).await? {
        return Err(CoreError::not_found("API", api_id).into());
    }
    tracing::info!(project_id = %project_id, api_id = %api_id, "API deleted");

    Ok(Json(MessageResponse {
        message: "API deleted successfully",
    }))
}
