//! API error types with HTTP response mapping.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use entry_store::EntryStoreError;
use serde::Serialize;

/// Title and detail used for every server-side failure. Callers never see
/// the underlying error.
pub const GENERIC_PROBLEM_TITLE: &str = "An error occurred while processing your request.";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Persistence failed while serving the request.
    Store(EntryStoreError),
}

/// RFC 9457 problem body.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: &'static str,
}

impl ProblemDetails {
    fn internal() -> Self {
        Self {
            kind: "https://tools.ietf.org/html/rfc9110#section-15.6.1",
            title: GENERIC_PROBLEM_TITLE,
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: GENERIC_PROBLEM_TITLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(err) => {
                tracing::error!(error = %err, "an error occurred while handling the request");
                metrics::counter!("entry_requests_failed_total").increment(1);
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(ProblemDetails::internal()),
        )
            .into_response()
    }
}

impl From<EntryStoreError> for ApiError {
    fn from(err: EntryStoreError) -> Self {
        ApiError::Store(err)
    }
}
