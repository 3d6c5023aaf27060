// Unit tests for AuthService over the in-memory store

use mynotes_api::auth::{AuthService, TokenService};
use mynotes_api::core::errors::NotesError;
use mynotes_api::core::models::{LoginRequest, SignupRequest};
use mynotes_api::store::{MemoryStore, UserStore};
use secrecy::Secret;
use std::sync::Arc;

fn create_service() -> (AuthService, Arc<TokenService>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let tokens = Arc::new(TokenService::new(&Secret::new("unit-test-secret".to_string())));
    let service = AuthService::new(store.clone(), tokens.clone());
    (service, tokens, store)
}

fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
    SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_signup_stores_hash_not_password() {
    let (service, tokens, store) = create_service();

    let response = service.signup(signup_request("Al", "a@x.com", "pass1")).await.unwrap();
    assert_eq!(response.user_name, "Al");

    let user = store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_ne!(user.password_hash, "pass1");
    assert!(user.password_hash.starts_with("$argon2"));
    assert_eq!(tokens.verify(&response.token).unwrap(), user.id);
}

#[tokio::test]
async fn test_signup_duplicate_email_is_conflict() {
    let (service, _, _) = create_service();
    service.signup(signup_request("Al", "a@x.com", "pass1")).await.unwrap();

    let err = service
        .signup(signup_request("Al", "a@x.com", "pass1"))
        .await
        .unwrap_err();
    assert!(matches!(err, NotesError::Conflict));
}

#[tokio::test]
async fn test_signup_name_boundary() {
    let (service, _, _) = create_service();

    let err = service.signup(signup_request("A", "a@x.com", "pass1")).await.unwrap_err();
    assert!(matches!(err, NotesError::Validation(_)));

    assert!(service.signup(signup_request("Al", "a@x.com", "pass1")).await.is_ok());
}

#[tokio::test]
async fn test_login_with_empty_password_is_invalid_credentials() {
    let (service, _, _) = create_service();
    service.signup(signup_request("Al", "a@x.com", "pass1")).await.unwrap();

    let err = service
        .login(LoginRequest {
            email: "a@x.com".to_string(),
            password: Some(String::new()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, NotesError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_rejects_malformed_email_before_lookup() {
    let (service, _, _) = create_service();

    let err = service
        .login(LoginRequest {
            email: "nope".to_string(),
            password: Some("pass1".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, NotesError::Validation(_)));
}

#[tokio::test]
async fn test_get_current_user_unknown_id() {
    let (service, _, _) = create_service();

    let err = service.get_current_user(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, NotesError::Unauthenticated));
}
