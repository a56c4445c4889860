//! Repository for the `apis` table.
//!
//! Lookups that take a `project_id` are scoped: an API is only visible
//! through the project that owns it.

use baas_core::ids::generate_short_id;
use baas_core::status;
use sqlx::{PgConnection, PgPool};

use crate::models::api::{Api, CreateApi, UpdateApi};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, path, method, table_name, status, created_at, updated_at";

/// Provides CRUD operations for APIs.
pub struct ApiRepo;

impl ApiRepo {
    /// Insert a new API under `project_id`, returning the created row.
    ///
    /// The caller is expected to have checked that the project exists; a
    /// dangling `project_id` surfaces as a foreign key violation.
    pub async fn create(
        pool: &PgPool,
        project_id: &str,
        input: &CreateApi,
    ) -> Result<Api, sqlx::Error> {
        let query = format!(
            "INSERT INTO apis (id, project_id, name, path, method, table_name, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Api>(&query)
            .bind(generate_short_id())
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.path)
            .bind(&input.method)
            .bind(&input.table_name)
            .bind(status::ACTIVE)
            .fetch_one(pool)
            .await
    }

    /// Find an API by id within a project.
    pub async fn find_scoped(
        pool: &PgPool,
        project_id: &str,
        id: &str,
    ) -> Result<Option<Api>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apis WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Api>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List the APIs of one project in creation order.
    pub async fn list_by_project(pool: &PgPool, project_id: &str) -> Result<Vec<Api>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM apis WHERE project_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Api>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List the APIs of several projects in one round trip, in creation order.
    pub async fn list_by_projects(
        pool: &PgPool,
        project_ids: &[String],
    ) -> Result<Vec<Api>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM apis WHERE project_id = ANY($1) ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Api>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }

    /// Update an API within a project. Only present, non-empty fields are
    /// applied; `updated_at` is always refreshed.
    ///
    /// Returns `None` if the project has no API with the given `id`.
    pub async fn update(
        pool: &PgPool,
        project_id: &str,
        id: &str,
        input: &UpdateApi,
    ) -> Result<Option<Api>, sqlx::Error> {
        let query = format!(
            "UPDATE apis SET
                name = COALESCE(NULLIF($3, ''), name),
                path = COALESCE(NULLIF($4, ''), path),
                method = COALESCE(NULLIF($5, ''), method),
                table_name = COALESCE(NULLIF($6, ''), table_name),
                updated_at = NOW()
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Api>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.path)
            .bind(&input.method)
            .bind(&input.table_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an API within a project. Returns `true` if a row was removed.
    pub async fn delete_scoped(pool: &PgPool, project_id: &str, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM apis WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every API of a project on the given connection, returning the
    /// number of rows removed. Used inside the project delete transaction.
    pub async fn delete_by_project(
        conn: &mut PgConnection,
        project_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM apis WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
