//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roomcraft_domain::error::{RoomcraftError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RoomcraftError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RoomcraftError);

impl From<RoomcraftError> for ApiError {
    fn from(err: RoomcraftError) -> Self {
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
        let (status, message) = match &self.0 {
            RoomcraftError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RoomcraftError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            RoomcraftError::Storage(err) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "document store unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
