// Axum web server layer

use axum::{
    error_handling::HandleErrorLayer,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;

pub mod handlers;
pub mod middleware;
pub mod responses;

use crate::auth::auth_middleware::auth_middleware;
use crate::auth::{AuthService, TokenService};
use crate::notes::NoteService;
use crate::store::{NoteStore, UserStore};

pub use crate::config::Config;

/// Application state containing all shared dependencies
///
/// Holds no mutable state of its own; every field is shared read-only
/// across requests.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub notes: Arc<NoteService>,
    pub tokens: Arc<TokenService>,
    pub user_store: Arc<dyn UserStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire services over the given stores
    pub fn new(config: Config, user_store: Arc<dyn UserStore>, note_store: Arc<dyn NoteStore>) -> Self {
        let tokens = Arc::new(TokenService::new(&config.jwt_secret));

        Self {
            auth: Arc::new(AuthService::new(user_store.clone(), tokens.clone())),
            notes: Arc::new(NoteService::new(note_store)),
            tokens,
            user_store,
            config: Arc::new(config),
        }
    }
}

/// Create the Axum router with all routes and middleware
///
/// Only the protected routes carry the authorization layer; signup, login
/// and `/health` are public.
///
/// Middleware stack (outermost to innermost):
/// - Tracing (tower-http::trace)
/// - CORS, permissive
/// - Request timeout, 408 on expiry
/// - Body size limit, 413 when exceeded
/// - Authorization (protected routes only)
pub fn create_router(app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/getuser", get(handlers::get_user_handler))
        .route("/notes", get(handlers::list_notes_handler))
        .route("/notes/addnote", post(handlers::add_note_handler))
        .route("/notes/updateNote/:id", put(handlers::update_note_handler))
        .route("/notes/deleteNote/:id", delete(handlers::delete_note_handler))
        .route_layer(from_fn_with_state(app_state.tokens.clone(), auth_middleware));

    let public = Router::new()
        .route("/auth/signup", post(handlers::signup_handler))
        .route("/auth/login", post(handlers::login_handler))
        .route("/health", get(handlers::health_handler));

    let body_limit = app_state.config.body_size_limit_bytes;
    let timeout_secs = app_state.config.request_timeout_secs;

    // Layers wrap in reverse: the last one added runs first
    public
        .merge(protected)
        .layer(middleware::body_size_limit_layer(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(middleware::handle_middleware_error))
                .timeout(Duration::from_secs(timeout_secs)),
        )
        .layer(middleware::cors_layer())
        .layer(middleware::tracing_layer())
}
