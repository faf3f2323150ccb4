//! API error types and responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::rest::dto::RecordError;
use crate::store::StoreError;

/// Body returned for every failed submission
pub const SUBMIT_FAILED: &str = "Error submitting form";

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// The submission could not be parsed, checked or persisted.
    /// The cause is logged and never sent to the client.
    SubmitFailed(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::SubmitFailed(cause) => {
                tracing::error!(%cause, "Error submitting form");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: SUBMIT_FAILED.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SubmitFailed(format!("JSON error: {}", err))
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        ApiError::SubmitFailed(format!("Validation failed: {}", err))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::SubmitFailed(err.to_string())
    }
}
