//! Request handlers.

pub mod auth;
pub mod cards;
pub mod users;

use crate::error::AppError;

/// Fallback for unmatched routes.
pub async fn fallback_handler() -> AppError {
    AppError::NotFound("Requested resource not found".into())
}
