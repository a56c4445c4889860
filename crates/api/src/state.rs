/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: baas_db::DbPool,
}

impl AppState {
    pub fn new(pool: baas_db::DbPool) -> Self {
        Self { pool }
    }
}
