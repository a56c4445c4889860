//! API entity model and DTOs.
//!
//! An API row is metadata describing one endpoint exposed over a table of
//! the parent project's external database.

use baas_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An API row from the `apis` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Api {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub path: String,
    pub method: String,
    pub table_name: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an API under a project. The project id comes from the
/// request path, not the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApi {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "path must not be empty"))]
    pub path: String,
    #[validate(length(min = 1, message = "method must not be empty"))]
    pub method: String,
    #[validate(length(min = 1, message = "table_name must not be empty"))]
    pub table_name: String,
}

/// DTO for updating an API. Absent and empty fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateApi {
    pub name: Option<String>,
    pub path: Option<String>,
    pub method: Option<String>,
    pub table_name: Option<String>,
}
