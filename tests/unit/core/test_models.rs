// Unit tests for core data models

use chrono::Utc;
use mynotes_api::core::models::*;
use uuid::Uuid;

#[test]
fn test_auth_response_uses_camel_case() {
    let response = AuthResponse {
        token: "abc".to_string(),
        user_name: "Al".to_string(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["userName"], "Al");
    assert!(json.get("user_name").is_none());
}

#[test]
fn test_delete_response_shape() {
    let note = Note {
        id: Uuid::new_v4(),
        owner: Uuid::new_v4(),
        title: "Shopping".to_string(),
        desc: "Buy groceries".to_string(),
        tag: None,
        date: Utc::now(),
    };
    let response = DeleteNoteResponse {
        message: "Note deleted successfully".to_string(),
        deleted_note: note.clone(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["message"], "Note deleted successfully");
    assert_eq!(json["deletedNote"]["_id"], note.id.to_string());
    assert!(json["deletedNote"]["tag"].is_null());
}

#[test]
fn test_patch_ignores_unknown_and_missing_fields() {
    let patch: NotePatch = serde_json::from_str(r#"{"tag":"work","user":"someone-else"}"#).unwrap();

    assert_eq!(patch.tag.as_deref(), Some("work"));
    assert!(patch.title.is_none());
    assert!(patch.desc.is_none());
}

#[test]
fn test_signup_request_debug_redacts_password() {
    let request: SignupRequest =
        serde_json::from_str(r#"{"name":"Al","email":"a@x.com","password":"pass1"}"#).unwrap();

    let debug = format!("{:?}", request);
    assert!(debug.contains("a@x.com"));
    assert!(!debug.contains("pass1"));
}

#[test]
fn test_create_note_request_tag_optional() {
    let request: CreateNoteRequest =
        serde_json::from_str(r#"{"title":"Hello World","desc":"Test note body"}"#).unwrap();

    assert_eq!(request.title, "Hello World");
    assert!(request.tag.is_none());
}
