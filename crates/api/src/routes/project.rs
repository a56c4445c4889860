//! Route definitions for the `/projects` resource.
//!
//! Also nests project-scoped API routes under `/projects/{id}/apis`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{api, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
///
/// GET    /{id}/apis               -> list_by_project
/// POST   /{id}/apis               -> create
/// GET    /{id}/apis/{api_id}      -> get_by_id
/// PUT    /{id}/apis/{api_id}      -> update
/// DELETE /{id}/apis/{api_id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    let api_routes = Router::new()
        .route("/", get(api::list_by_project).post(api::create))
        .route(
            "/{api_id}",
            get(api::get_by_id).put(api::update).delete(api::delete),
        );

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{id}/apis", api_routes)
}
