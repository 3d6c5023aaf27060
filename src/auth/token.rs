// Stateless bearer tokens: HS256 JWT carrying only the user id

use crate::core::errors::TokenError;
use crate::core::models::UserId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Token payload
///
/// No `exp`, `iat` or scopes: a token stays valid until the secret changes.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: UserId,
}

/// Signs and verifies tokens with a shared secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
}

impl TokenService {
    /// Build a token service from the configured secret
    pub fn new(secret: &Secret<String>) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            header: Header::new(Algorithm::HS256),
            validation,
        }
    }

    /// Sign a token for `user_id`
    ///
    /// Deterministic: the same secret and id always yield the same token.
    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        encode(&self.header, &Claims { id: user_id }, &self.encoding_key)
            .map_err(|e| TokenError::SigningError(e.to_string()))
    }

    /// Check the signature and recover the embedded user id
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        if token.is_empty() {
            return Err(TokenError::InvalidToken("empty token".to_string()));
        }

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.id)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))
    }
}
