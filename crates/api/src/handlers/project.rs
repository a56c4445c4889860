//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use baas_core::error::CoreError;
use baas_core::ids::ensure_lookup_id;
use baas_db::models::project::{CreateProject, Project, ProjectWithApis, UpdateProject};
use baas_db::repositories::{ApiRepo, ProjectRepo};
use baas_db::DbPool;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{MessageResponse, ProjectListResponse, ProjectResponse};
use crate::state::AppState;

/// Fetch a project or fail with a 404.
pub(crate) async fn ensure_project_exists(pool: &DbPool, id: &str) -> AppResult<Project> {
    ensure_lookup_id("Project", id)?;
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id).into())
}

/// POST /baas/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    input.validate()?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, name = %project.name, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse::with_message(
            "Project created successfully",
            ProjectWithApis::new(project, Vec::new()),
        )),
    ))
}

/// GET /baas/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ProjectListResponse>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let ids: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();
    let apis = ApiRepo::list_by_projects(&state.pool, &ids).await?;

    Ok(Json(ProjectWithApis::group(projects, apis).into()))
}

/// GET /baas/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ensure_project_exists(&state.pool, &id).await?;
    let apis = ApiRepo::list_by_project(&state.pool, &id).await?;

    Ok(Json(ProjectResponse::new(ProjectWithApis::new(project, apis))))
}

/// PUT /baas/projects/{id}
///
/// Partial update: absent or empty fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<ProjectResponse>> {
    ensure_lookup_id("Project", &id)?;
    let project = ProjectRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id.as_str()))?;
    let apis = ApiRepo::list_by_project(&state.pool, &id).await?;
    tracing::info!(project_id = %project.id, "Project updated");

    Ok(Json(ProjectResponse::with_message(
        "Project updated successfully",
        ProjectWithApis::new(project, apis),
    )))
}

/// DELETE /baas/projects/{id}
///
/// Removes the project's APIs and then the project itself, atomically.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    ensure_lookup_id("Project", &id)?;
    if !ProjectRepo::delete_with_apis(&state.pool, &id).await? {
        return Err(CoreError::not_found("Project", id).into());
    }
    tracing::info!(project_id = %id, "Project deleted");

    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}
