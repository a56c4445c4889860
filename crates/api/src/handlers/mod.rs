//! HTTP handlers, one module per resource.

pub mod api;
pub mod project;
