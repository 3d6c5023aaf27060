// Unit tests for header-based authentication

use axum::http::{header, HeaderMap, HeaderValue};
use mynotes_api::auth::auth_middleware::AUTH_TOKEN_HEADER;
use mynotes_api::auth::{authenticate, AuthUser, TokenService};
use mynotes_api::core::errors::{NotesError, TokenError};
use secrecy::Secret;
use uuid::Uuid;

fn tokens() -> TokenService {
    TokenService::new(&Secret::new("unit-test-secret".to_string()))
}

#[test]
fn test_authenticate_resolves_user() {
    let tokens = tokens();
    let user_id = Uuid::new_v4();
    let token = tokens.issue(user_id).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_str(&token).unwrap());

    assert_eq!(authenticate(&headers, &tokens).unwrap(), AuthUser(user_id));
}

#[test]
fn test_authenticate_missing_header() {
    let err = authenticate(&HeaderMap::new(), &tokens()).unwrap_err();
    assert!(matches!(err, NotesError::Unauthenticated));
}

#[test]
fn test_authenticate_bad_signature() {
    let other = TokenService::new(&Secret::new("another-secret".to_string()));
    let token = other.issue(Uuid::new_v4()).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token)).unwrap());

    let err = authenticate(&headers, &tokens()).unwrap_err();
    assert!(matches!(err, NotesError::Token(TokenError::InvalidToken(_))));
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.user_message(), NotesError::Unauthenticated.user_message());
}

#[test]
fn test_authenticate_garbage_token_renders_as_unauthenticated() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_static("not.a.token"));

    let err = authenticate(&headers, &tokens()).unwrap_err();
    assert!(matches!(err, NotesError::Token(TokenError::InvalidToken(_))));
    assert_eq!(err.status_code(), NotesError::Unauthenticated.status_code());
    assert!(!err.user_message().contains("InvalidSignature"));
}
