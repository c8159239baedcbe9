//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devices_domain::error::{DevicesError, ValidationError};

/// JSON body returned alongside every non-success status.
#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

/// Build a `{"message": ...}` response with the given status.
pub(crate) fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(MessageBody { message })).into_response()
}

/// Maps [`DevicesError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DevicesError);

impl From<DevicesError> for ApiError {
    fn from(err: DevicesError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            DevicesError::Validation(err) => {
                tracing::debug!(error = %err, "rejected request");
                message_response(StatusCode::BAD_REQUEST, &err.to_string())
            }
            DevicesError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}
