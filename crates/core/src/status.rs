//! Entity status labels.
//!
//! `status` is advisory text: rows are created as [`ACTIVE`] and nothing
//! filters or transitions on it.

/// Status assigned to every newly created project and API.
pub const ACTIVE: &str = "active";
