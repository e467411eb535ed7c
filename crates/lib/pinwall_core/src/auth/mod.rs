//! Authentication primitives.
//!
//! Provides password hashing and session token management, shared by the
//! API layer and the server binary.

pub mod password;
pub mod token;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
