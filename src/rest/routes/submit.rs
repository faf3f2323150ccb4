//! Form submission endpoint.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::form::Submission;
use crate::rest::dto::{SubmitFormRequest, SubmitFormResponse};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;

pub const SUBMITTED: &str = "Form submitted successfully";

/// Persist one Business Information Form submission.
///
/// The body is read as raw bytes so that malformed JSON is reported like
/// every other failure: a 500 with a generic message.
#[utoipa::path(
    post,
    path = "/api/submit-form",
    tag = "Submissions",
    request_body = SubmitFormRequest,
    responses(
        (status = 201, description = "Submission stored", body = SubmitFormResponse),
        (status = 500, description = "Submission could not be stored", body = ErrorResponse)
    )
)]
pub async fn submit_form(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmitFormResponse>), ApiError> {
    let request: SubmitFormRequest = serde_json::from_slice(&body)?;
    let submission = Submission::try_from(request)?;

    let stored = state.store.insert(&submission).await?;
    tracing::info!(
        id = %stored.id,
        has_website = %submission.has_website(),
        store = state.store.name(),
        "form submission stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitFormResponse {
            message: SUBMITTED.to_string(),
        }),
    ))
}
