use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::EngineError;

/// Error returned by the HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    Engine(EngineError),
    /// The request body or a path segment could not be parsed.
    Malformed(String),
    /// The blocking task running the engine call panicked or was cancelled.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Engine(err) => {
                let status = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = json!({ "error": err.to_string(), "reason": err.reason() });
                (status, Json(body)).into_response()
            }
            ApiError::Malformed(message) => {
                let body = json!({ "error": message, "reason": "MalformedRequest" });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "engine task failed");
                let body = json!({ "error": message, "reason": "Internal" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
