//! Response envelope types for API handlers.
//!
//! Each endpoint wraps its payload in a small named envelope (`project`,
//! `projects` + `total`, `api`, ...) with an optional human-readable
//! `message` on mutations.

use baas_db::models::api::Api;
use baas_db::models::project::ProjectWithApis;
use serde::Serialize;

/// `{ "message": ... }` for operations with no entity to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message"?: ..., "project": {...} }`
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub project: ProjectWithApis,
}

impl ProjectResponse {
    pub fn new(project: ProjectWithApis) -> Self {
        Self {
            message: None,
            project,
        }
    }

    pub fn with_message(message: &'static str, project: ProjectWithApis) -> Self {
        Self {
            message: Some(message),
            project,
        }
    }
}

/// `{ "projects": [...], "total": n }`
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectWithApis>,
    pub total: usize,
}

impl From<Vec<ProjectWithApis>> for ProjectListResponse {
    fn from(projects: Vec<ProjectWithApis>) -> Self {
        Self {
            total: projects.len(),
            projects,
        }
    }
}

/// `{ "message"?: ..., "api": {...} }`
#[derive(Debug, Serialize)]
pub struct ApiItemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub api: Api,
}

impl ApiItemResponse {
    pub fn new(api: Api) -> Self {
        Self { message: None, api }
    }

    pub fn with_message(message: &'static str, api: Api) -> Self {
        Self {
            message: Some(message),
            api,
        }
    }
}

/// `{ "apis": [...], "total": n }`
#[derive(Debug, Serialize)]
pub struct ApiListResponse {
    pub apis: Vec<Api>,
    pub total: usize,
}

impl From<Vec<Api>> for ApiListResponse {
    fn from(apis: Vec<Api>) -> Self {
        Self {
            total: apis.len(),
            apis,
        }
    }
}
