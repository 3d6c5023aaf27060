//! Signup, login and current-user lookup.
//!
//! Validation always runs to completion before the store is touched. Unknown
//! email and wrong password produce the same `InvalidCredentials` error.
//! Argon2 work is moved off the async workers with `spawn_blocking`.

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenService;
use crate::core::errors::NotesError;
use crate::core::models::{
    AuthResponse, LoginRequest, NewUser, SignupRequest, User, UserId, UserProfile,
};
use crate::core::validation::ValidationErrors;
use crate::store::UserStore;
use std::sync::Arc;
use tracing::{info, warn};

pub const MIN_PASSWORD_LENGTH: usize = 5;
pub const MIN_NAME_LENGTH: usize = 2;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid Email";
pub const SHORT_PASSWORD_MESSAGE: &str = "Password length must be at least 5 characters";
pub const SHORT_NAME_MESSAGE: &str = "Name length must be at least 2 characters";
pub const MISSING_PASSWORD_MESSAGE: &str = "Please enter a valid Password";

/// Authentication handler
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Create a credential and issue a token for it
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, NotesError> {
        let mut errors = ValidationErrors::new();
        errors
            .email("email", &request.email, INVALID_EMAIL_MESSAGE)
            .min_length("password", &request.password, MIN_PASSWORD_LENGTH, SHORT_PASSWORD_MESSAGE)
            .min_length("name", &request.name, MIN_NAME_LENGTH, SHORT_NAME_MESSAGE);
        errors.into_result()?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            info!("Signup rejected: email already registered");
            return Err(NotesError::Conflict);
        }

        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| NotesError::Internal(format!("Hashing task failed: {}", e)))??;

        // A racing signup can still lose here; the store reports it as DuplicateEmail
        let user = self
            .users
            .insert(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User signed up");
        self.respond_with_token(&user)
    }

    /// Verify a credential and issue a token for it
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, NotesError> {
        let mut errors = ValidationErrors::new();
        errors
            .email("email", &request.email, INVALID_EMAIL_MESSAGE)
            .check(request.password.is_some(), "password", MISSING_PASSWORD_MESSAGE);
        errors.into_result()?;
        let password = request.password.unwrap_or_default();

        let Some(user) = self.users.find_by_email(&request.email).await? else {
            warn!("Login failed: unknown email");
            return Err(NotesError::InvalidCredentials);
        };

        let stored_hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| NotesError::Internal(format!("Verification task failed: {}", e)))??;

        if !matches {
            warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(NotesError::InvalidCredentials);
        }

        info!(user_id = %user.id, "User logged in");
        self.respond_with_token(&user)
    }

    /// Profile of an already-authenticated user, without the password hash
    pub async fn get_current_user(&self, user_id: UserId) -> Result<UserProfile, NotesError> {
        match self.users.find_by_id(user_id).await? {
            Some(user) => Ok(user.into()),
            None => {
                // Signature was valid but the account no longer exists
                warn!(user_id = %user_id, "Token refers to unknown user");
                Err(NotesError::Unauthenticated)
            }
        }
    }

    fn respond_with_token(&self, user: &User) -> Result<AuthResponse, NotesError> {
        let token = self.tokens.issue(user.id)?;
        Ok(AuthResponse {
            token,
            user_name: user.name.clone(),
        })
    }
}
