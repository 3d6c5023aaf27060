// Salted one-way password hashing (Argon2id, PHC string format)

use crate::core::errors::NotesError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash `password` with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, NotesError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| NotesError::PasswordHash(e.to_string()))
}

/// Compare `password` against a stored hash in constant time
///
/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, NotesError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| NotesError::PasswordHash(format!("Invalid stored hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(NotesError::PasswordHash(e.to_string())),
    }
}
