// Domain error types - callers only ever see safe messages

use crate::core::validation::ValidationErrors;
use thiserror::Error;

/// Message shown for every failure the caller cannot act on
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Main error type for the notes service
#[derive(Error, Debug)]
pub enum NotesError {
    /// Malformed or too-short input (HTTP 400)
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Unique field already taken (HTTP 400)
    #[error("A user with this email already exists.")]
    Conflict,

    /// Unknown email or wrong password; both read the same (HTTP 400)
    #[error("Please enter valid credentials.")]
    InvalidCredentials,

    /// Missing or unverifiable token (HTTP 401)
    #[error("Please authenticate using a valid token")]
    Unauthenticated,

    /// Authenticated caller does not own the resource (HTTP 403)
    #[error("Not allowed")]
    Forbidden,

    /// Resource does not exist (HTTP 404)
    #[error("Not found")]
    NotFound,

    /// Token signing or verification failure
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Password hashing failure (HTTP 500)
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Datastore failure (HTTP 500)
    #[error("Store error: {0}")]
    Store(StoreError),

    /// Configuration error (HTTP 500)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Any other infrastructure failure (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Token operation errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// Bad signature, malformed or empty token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Failed to sign token
    #[error("Failed to sign token: {0}")]
    SigningError(String),
}

/// Datastore errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// The driver or the database rejected the operation
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Insert violated the unique email constraint
    #[error("Duplicate email")]
    DuplicateEmail,
}

impl From<StoreError> for NotesError {
    fn from(err: StoreError) -> Self {
        match err {
            // The store constraint is the authoritative uniqueness signal
            StoreError::DuplicateEmail => NotesError::Conflict,
            other => NotesError::Store(other),
        }
    }
}

impl NotesError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            NotesError::Validation(_) => 400,
            NotesError::Conflict => 400,
            NotesError::InvalidCredentials => 400,
            NotesError::Unauthenticated => 401,
            NotesError::Forbidden => 403,
            NotesError::NotFound => 404,
            NotesError::Token(TokenError::InvalidToken(_)) => 401,
            NotesError::Token(TokenError::SigningError(_)) => 500,
            NotesError::PasswordHash(_) => 500,
            NotesError::Store(_) => 500,
            NotesError::ConfigurationError(_) => 500,
            NotesError::Internal(_) => 500,
        }
    }

    /// Get user-friendly error message (no sensitive information)
    pub fn user_message(&self) -> String {
        match self {
            NotesError::Validation(_) => "Validation failed".to_string(),
            NotesError::Token(TokenError::InvalidToken(_)) => {
                NotesError::Unauthenticated.to_string()
            }
            NotesError::Conflict
            | NotesError::InvalidCredentials
            | NotesError::Unauthenticated
            | NotesError::Forbidden
            | NotesError::NotFound => self.to_string(),
            NotesError::Token(TokenError::SigningError(_))
            | NotesError::PasswordHash(_)
            | NotesError::Store(_)
            | NotesError::ConfigurationError(_)
            | NotesError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the cause stays server-side
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}
