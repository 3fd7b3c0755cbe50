//! The error shape shared by every endpoint.

use axum::{Json, http::StatusCode};
use schemars::JsonSchema;
use serde::Serialize;

/// Body of every failed response.
#[derive(Serialize, JsonSchema)]
pub(crate) struct ErrorResponse {
    /// A fixed message naming the operation that failed
    error: String,
}

/// What a handler returns when it fails.
pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build an [`ApiError`] with a fixed message.
pub(crate) fn failure(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
