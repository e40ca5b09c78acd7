//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] hotplate_core::EmailError),

    /// Invalid phone number format.
    #[error("invalid phone number: {0}")]
    InvalidPhone(#[from] hotplate_core::PhoneError),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Email already registered.
    #[error("email already registered")]
    EmailTaken,

    /// Login failed (unknown email or wrong password; callers cannot tell
    /// which).
    #[error("login failed")]
    LoginFailed,

    /// OTP mismatch or expired.
    #[error("one-time passcode rejected")]
    OtpRejected,

    /// The authenticated principal's profile could not be loaded.
    #[error("profile unavailable")]
    ProfileUnavailable,

    /// Bearer token failed validation.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
