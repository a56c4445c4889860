//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument, or `&mut PgConnection`
//! when the statement must join a caller's transaction.

pub mod api_repo;
pub mod project_repo;

pub use api_repo::ApiRepo;
pub use project_repo::ProjectRepo;
