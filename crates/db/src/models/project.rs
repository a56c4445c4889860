//! Project entity model and DTOs.

use baas_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::api::Api;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Connection string of the external database this project represents.
    /// Stored verbatim; never connected to.
    pub database_url: String,
    pub database_type: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "database_url must not be empty"))]
    pub database_url: String,
    #[validate(length(min = 1, message = "database_type must not be empty"))]
    pub database_type: String,
}

/// DTO for updating an existing project.
///
/// Absent and empty fields leave the stored value unchanged; there is no
/// way to clear a field through this DTO.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub database_url: Option<String>,
    pub database_type: Option<String>,
}

/// A project together with the APIs registered under it.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithApis {
    #[serde(flatten)]
    pub project: Project,
    pub apis: Vec<Api>,
}

impl ProjectWithApis {
    pub fn new(project: Project, apis: Vec<Api>) -> Self {
        Self { project, apis }
    }

    /// Attach each API to its parent project.
    ///
    /// Project order and the relative order of each project's APIs are
    /// preserved. APIs whose parent is not in `projects` are dropped.
    pub fn group(projects: Vec<Project>, apis: Vec<Api>) -> Vec<Self> {
        let mut grouped: Vec<Self> = projects
            .into_iter()
            .map(|project| Self::new(project, Vec::new()))
            .collect();

        for api in apis {
            if let Some(parent) = grouped
                .iter_mut()
                .find(|entry| entry.project.id == api.project_id)
            {
                parent.apis.push(api);
            }
        }

        grouped
    }
}
