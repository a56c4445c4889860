pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Path prefix every route is mounted under.
pub const BASE_PATH: &str = "/baas";

/// Build the route tree mounted at [`BASE_PATH`].
///
/// ```text
/// /health                                    service + database health
///
/// /projects                                  list, create
/// /projects/{id}                             get, update, delete (with APIs)
/// /projects/{id}/apis                        list, create
/// /projects/{id}/apis/{api_id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
}
