//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Malformed JSON, a missing content type, and missing or mistyped fields
/// all become a 400 `VALIDATION_ERROR` response in the standard error shape
/// instead of axum's plain-text 4xx defaults.
///
/// Field-level rules (`#[validate(...)]`) are not run here; handlers call
/// `validate()` on the extracted value.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
