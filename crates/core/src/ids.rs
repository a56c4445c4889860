//! Short opaque identifiers for projects and APIs.

use crate::error::CoreError;

/// Length of every generated identifier.
pub const SHORT_ID_LEN: usize = 8;

/// Generate a fresh identifier: the leading [`SHORT_ID_LEN`] hex characters
/// of a random v4 UUID.
///
/// Identifiers are random and never derived from entity content, so two
/// projects with the same name still get distinct ids.
///
/// ```
/// let id = baas_core::ids::generate_short_id();
/// assert_eq!(id.len(), baas_core::ids::SHORT_ID_LEN);
/// ```
pub fn generate_short_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(SHORT_ID_LEN);
    id
}

/// Reject an id taken from a request path that no stored row can carry.
///
/// Postgres text columns cannot hold a NUL byte and refuse it as a query
/// parameter, so such an id is reported as not found without a lookup.
pub fn ensure_lookup_id(entity: &'static str, id: &str) -> Result<(), CoreError> {
    if id.contains('\0') {
        return Err(CoreError::not_found(entity, id));
    }
    Ok(())
}
