//! Domain primitives shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod ids;
pub mod status;
pub mod types;
