// Unit tests for API response types

use axum::{http::StatusCode, response::IntoResponse};
use mynotes_api::api::responses::*;
use mynotes_api::core::errors::*;
use mynotes_api::core::validation::{FieldError, ValidationErrors};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_error_response_omits_empty_field_errors() {
    let response = ErrorResponse {
        error: "Not found".to_string(),
        errors: None,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("Not found"));
    assert!(!json.contains("errors"));
}

#[test]
fn test_error_response_with_field_errors() {
    let response = ErrorResponse {
        error: "Validation failed".to_string(),
        errors: Some(vec![FieldError {
            field: "title".to_string(),
            message: "Title length must be at least 5 characters".to_string(),
        }]),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["errors"][0]["field"], "title");
}

#[test]
fn test_health_response_serialization() {
    let response = HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("healthy"));
    assert!(json.contains("connected"));
}

#[test]
fn test_api_error_status_mapping() {
    let cases = [
        (NotesError::Conflict, StatusCode::BAD_REQUEST),
        (NotesError::InvalidCredentials, StatusCode::BAD_REQUEST),
        (NotesError::Unauthenticated, StatusCode::UNAUTHORIZED),
        (NotesError::Forbidden, StatusCode::FORBIDDEN),
        (NotesError::NotFound, StatusCode::NOT_FOUND),
        (NotesError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (err, expected) in cases {
        assert_eq!(ApiError::from(err).status, expected);
    }
}

#[tokio::test]
async fn test_validation_error_body_lists_fields() {
    let mut errors = ValidationErrors::new();
    errors
        .check(false, "title", "Title length must be at least 5 characters")
        .check(false, "desc", "Description length must be at least 5 characters");

    let response = ApiError::from(NotesError::Validation(errors)).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    assert_eq!(body["errors"][1]["field"], "desc");
}

#[tokio::test]
async fn test_internal_error_body_is_generic() {
    let err = NotesError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));
    let response = ApiError::from(err).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    assert!(body.get("errors").is_none());
}
