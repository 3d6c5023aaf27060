// Request handlers for API endpoints

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::responses::{ApiError, ApiJson, HealthResponse};
use crate::api::AppState;
use crate::auth::AuthUser;
use crate::core::models::{
    AuthResponse, CreateNoteRequest, DeleteNoteResponse, LoginRequest, Note, NotePatch,
    SignupRequest, UserProfile,
};

/// POST /auth/signup
pub async fn signup_handler(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    debug!("Signup request");
    Ok(Json(app_state.auth.signup(request).await?))
}

/// POST /auth/login
pub async fn login_handler(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    debug!("Login request");
    Ok(Json(app_state.auth.login(request).await?))
}

/// GET /auth/getuser
pub async fn get_user_handler(
    State(app_state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(app_state.auth.get_current_user(user_id).await?))
}

/// GET /notes
pub async fn list_notes_handler(
    State(app_state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(app_state.notes.list(user_id).await?))
}

/// POST /notes/addnote
pub async fn add_note_handler(
    State(app_state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    ApiJson(request): ApiJson<CreateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(app_state.notes.create(user_id, request).await?))
}

/// PUT /notes/updateNote/:id
pub async fn update_note_handler(
    State(app_state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(note_id): Path<String>,
    ApiJson(patch): ApiJson<NotePatch>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(app_state.notes.update(user_id, &note_id, patch).await?))
}

/// DELETE /notes/deleteNote/:id
pub async fn delete_note_handler(
    State(app_state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(note_id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    Ok(Json(app_state.notes.delete(user_id, &note_id).await?))
}

/// GET /health
///
/// Reports the store as "connected" or with the ping error; never fails itself.
pub async fn health_handler(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let database = match tokio::time::timeout(
        Duration::from_millis(800),
        app_state.user_store.ping(),
    )
    .await
    {
        Ok(Ok(())) => "connected".to_string(),
        Ok(Err(e)) => {
            warn!(error = %e, "Store ping failed");
            "unavailable".to_string()
        }
        Err(_) => {
            warn!("Store ping timed out");
            "unavailable: timeout".to_string()
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        database,
    })
}
