// Response types for API endpoints

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::core::errors::NotesError;
use crate::core::validation::FieldError;

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// API error type that converts domain errors to HTTP responses
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            errors: None,
        }
    }

    /// Create from NotesError
    ///
    /// Internal causes are logged here and replaced by a generic message.
    pub fn from_notes_error(err: NotesError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if err.is_internal() {
            error!(error = %err, "Request failed with internal error");
        }

        let message = err.user_message();
        let errors = match err {
            NotesError::Validation(fields) => Some(fields.into_errors()),
            _ => None,
        };

        Self {
            status,
            message,
            errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
            errors: self.errors,
        });
        (self.status, body).into_response()
    }
}

impl From<NotesError> for ApiError {
    fn from(err: NotesError) -> Self {
        ApiError::from_notes_error(err)
    }
}

const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";
const UNSUPPORTED_CONTENT_TYPE_MESSAGE: &str = "Expected Content-Type: application/json";
const INVALID_BODY_MESSAGE: &str = "Invalid JSON body";

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        debug!(status = %status, rejection = %rejection.body_text(), "Request body rejected");

        let message = match status {
            StatusCode::PAYLOAD_TOO_LARGE => BODY_TOO_LARGE_MESSAGE,
            StatusCode::UNSUPPORTED_MEDIA_TYPE => UNSUPPORTED_CONTENT_TYPE_MESSAGE,
            _ => INVALID_BODY_MESSAGE,
        };
        ApiError::new(status, message.to_string())
    }
}

/// JSON body extractor whose rejections use the structured error body
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
