//! Password hashing and verification.

use bcrypt::DEFAULT_COST;

use crate::constants::{ERR_PASSWORD_REQUIRED, ERR_PASSWORD_TOO_LONG, ERR_PASSWORD_TOO_SHORT};
use crate::errors::ApiError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// bcrypt truncates input beyond 72 bytes, so longer passwords are rejected
/// rather than silently clipped.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a password using bcrypt. The salt is random per call, so hashing
/// the same plaintext twice yields different digests.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    if password.is_empty() {
        return Err(ApiError::BadRequest(ERR_PASSWORD_REQUIRED.to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(ERR_PASSWORD_TOO_SHORT.to_string()));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ApiError::BadRequest(ERR_PASSWORD_TOO_LONG.to_string()));
    }

    Ok(bcrypt::hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt digest.
///
/// A wrong password and a malformed digest both return `false`; callers
/// must not be able to tell the two apart.
pub fn verify_password(password: &str, digest: &str) -> bool {
    bcrypt::verify(password, digest).unwrap_or(false)
}
