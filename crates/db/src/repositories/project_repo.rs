//! Repository for the `projects` table.

use baas_core::ids::generate_short_id;
use baas_core::status;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::ApiRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, database_url, database_type, status, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a freshly generated id, returning the
    /// created row. Status starts as `active`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, name, description, database_url, database_type, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(generate_short_id())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.database_url)
            .bind(&input.database_type)
            .bind(status::ACTIVE)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at, id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only fields that are present and non-empty in
    /// `input` are applied; `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE(NULLIF($2, ''), name),
                description = COALESCE(NULLIF($3, ''), description),
                database_url = COALESCE(NULLIF($4, ''), database_url),
                database_type = COALESCE(NULLIF($5, ''), database_type),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.database_url)
            .bind(&input.database_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and every API registered under it.
    ///
    /// The project row is locked first, so API inserts for it wait until
    /// the transaction ends and any insert committed earlier is removed
    /// with the rest. Child rows go next, then the project row.
    /// Returns `true` if the project row existed.
    pub async fn delete_with_apis(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(String,)> =
            sqlx::query_as("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        let apis_removed = ApiRepo::delete_by_project(&mut tx, id).await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            project_id = id,
            apis_removed,
            project_removed = result.rows_affected(),
            "Project delete committed",
        );
        Ok(result.rows_affected() > 0)
    }
}
