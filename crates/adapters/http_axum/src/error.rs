//! HTTP error response mapping.

use std::error::Error as _;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use contactbook_domain::error::{ContactBookError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ContactBookError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ContactBookError);

impl From<ContactBookError> for ApiError {
    fn from(err: ContactBookError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

/// Unparseable bodies are a client mistake like any other validation failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ContactBookError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ContactBookError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ContactBookError::Storage(err) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
