// Authentication & authorization module

pub mod auth_middleware;
pub mod password;
pub mod service;
pub mod token;

pub use auth_middleware::{authenticate, AuthUser};
pub use service::AuthService;
pub use token::TokenService;
