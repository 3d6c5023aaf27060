// Configuration management

use crate::core::errors::NotesError;
use secrecy::{ExposeSecret, Secret};
use std::env;

/// Application configuration loaded from environment variables
///
/// With `DATABASE_URL` unset the service runs on the in-memory store.
/// All values are validated on load with clear error messages.
#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub bind_address: String,
    pub port: u16,

    // Database configuration (optional)
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    // Token signing secret, never logged
    pub jwt_secret: Secret<String>,

    // Middleware configuration
    pub request_timeout_secs: u64,
    pub body_size_limit_bytes: usize,

    // Logging configuration
    pub log_level: String,
    pub log_format: String, // "json" or "text"
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Supports `.env` file loading in development (via dotenv crate).
    pub fn from_env() -> Result<Self, NotesError> {
        // Skip in tests so the process environment stays authoritative
        #[cfg(not(test))]
        {
            dotenv::dotenv().ok();
        }

        let config = Self {
            bind_address: Self::get_env_or_default("BIND_ADDRESS", "0.0.0.0"),
            port: Self::parse_port()?,
            database_url: Self::get_optional_env("DATABASE_URL"),
            database_max_connections: Self::parse_or_default("DATABASE_MAX_CONNECTIONS", 10u32)?,
            jwt_secret: Self::get_required_secret("JWT_SECRET")?,
            request_timeout_secs: Self::parse_or_default("REQUEST_TIMEOUT_SECS", 30u64)?,
            body_size_limit_bytes: Self::parse_or_default("BODY_SIZE_LIMIT_BYTES", 100 * 1024usize)?,
            log_level: Self::get_env_or_default("LOG_LEVEL", "info"),
            log_format: Self::get_env_or_default("LOG_FORMAT", "json"),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get environment variable or return default value
    fn get_env_or_default(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get optional environment variable; empty counts as unset
    fn get_optional_env(key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Get a required, non-empty secret
    fn get_required_secret(key: &str) -> Result<Secret<String>, NotesError> {
        let value = env::var(key)
            .map_err(|_| NotesError::ConfigurationError(format!("{} not set", key)))?;

        if value.is_empty() {
            return Err(NotesError::ConfigurationError(format!("{} is empty", key)));
        }

        Ok(Secret::new(value))
    }

    /// Parse port from PORT environment variable
    fn parse_port() -> Result<u16, NotesError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "1000".to_string());
        let port = port_str.parse::<u16>().map_err(|e| {
            NotesError::ConfigurationError(format!("Invalid PORT value '{}': {}", port_str, e))
        })?;

        if port == 0 {
            return Err(NotesError::ConfigurationError(
                "PORT must be between 1 and 65535".to_string(),
            ));
        }

        Ok(port)
    }

    /// Parse a positive number from an environment variable or return default
    fn parse_or_default<T>(key: &str, default: T) -> Result<T, NotesError>
    where
        T: std::str::FromStr + PartialEq + Default,
        T::Err: std::fmt::Display,
    {
        match env::var(key) {
            Ok(value) => {
                let parsed = value.parse::<T>().map_err(|e| {
                    NotesError::ConfigurationError(format!("Invalid {} value '{}': {}", key, value, e))
                })?;

                if parsed == T::default() {
                    return Err(NotesError::ConfigurationError(format!(
                        "{} must be greater than 0",
                        key
                    )));
                }

                Ok(parsed)
            }
            Err(_) => Ok(default),
        }
    }

    /// Validate all configuration values
    fn validate(&self) -> Result<(), NotesError> {
        if let Some(ref url) = self.database_url {
            Self::validate_url(url, "Database URL")?;
        }

        if self.jwt_secret.expose_secret().is_empty() {
            return Err(NotesError::ConfigurationError("JWT_SECRET is empty".to_string()));
        }

        Self::validate_log_level(&self.log_level)?;
        Self::validate_log_format(&self.log_format)?;

        Ok(())
    }

    /// Validate URL format
    fn validate_url(url: &str, description: &str) -> Result<(), NotesError> {
        // Never echo the URL itself: it may embed credentials
        url::Url::parse(url).map_err(|e| {
            NotesError::ConfigurationError(format!("Invalid {}: {}", description, e))
        })?;
        Ok(())
    }

    /// Validate log level
    fn validate_log_level(level: &str) -> Result<(), NotesError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&level.to_lowercase().as_str()) {
            return Err(NotesError::ConfigurationError(format!(
                "Invalid LOG_LEVEL '{}': must be one of {}",
                level,
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }

    /// Validate log format
    fn validate_log_format(format: &str) -> Result<(), NotesError> {
        if format != "json" && format != "text" {
            return Err(NotesError::ConfigurationError(format!(
                "Invalid LOG_FORMAT '{}': must be 'json' or 'text'",
                format
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Configuration for tests
    ///
    /// Bypasses environment loading; in-memory store, fixed secret.
    pub fn test_config() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 1000,
            database_url: None,
            database_max_connections: 10,
            jwt_secret: Secret::new("test-signing-secret".to_string()),
            request_timeout_secs: 30,
            body_size_limit_bytes: 100 * 1024,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}
