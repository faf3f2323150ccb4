//! OpenAPI document builder using utoipa.

use axum::Json;
use utoipa::OpenApi;

use crate::rest::dto::{HealthResponse, StatusResponse, SubmitFormRequest, SubmitFormResponse};
use crate::rest::error::ErrorResponse;

/// OpenAPI documentation for the leadform REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leadform API",
        description = "Intake endpoint for the Business Information Form.",
        license(name = "MIT")
    ),
    paths(
        crate::rest::routes::health::health,
        crate::rest::routes::health::status,
        crate::rest::routes::submit::submit_form,
    ),
    components(
        schemas(
            HealthResponse,
            StatusResponse,
            SubmitFormRequest,
            SubmitFormResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check and status endpoints"),
        (name = "Submissions", description = "Form submission intake"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI specification as a JSON string
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }
}

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
