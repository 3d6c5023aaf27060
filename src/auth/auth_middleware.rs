// Axum authorization middleware

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

use crate::api::responses::ApiError;
use crate::auth::token::TokenService;
use crate::core::errors::NotesError;
use crate::core::models::UserId;

/// Header carrying the token
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Identity resolved from a verified token, stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

/// Resolve the caller's identity from request headers
///
/// A missing or empty header is `NotesError::Unauthenticated`; a token that
/// fails verification is `NotesError::Token`. Both render as the same 401.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<AuthUser, NotesError> {
    let token = extract_token(headers).ok_or(NotesError::Unauthenticated)?;

    tokens.verify(&token).map(AuthUser).map_err(|e| {
        debug!(error = %e, "Token verification failed");
        NotesError::from(e)
    })
}

/// Authorization middleware function
///
/// Applied per route via `route_layer`; on success the handler receives
/// `Extension<AuthUser>`.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(request.headers(), &tokens)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Extract the token from `auth-token`, falling back to `Authorization: Bearer`
fn extract_token(headers: &HeaderMap) -> Option<String> {
    let custom = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let bearer = || {
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    custom.or_else(bearer).map(|s| s.to_string())
}
