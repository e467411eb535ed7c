//! Authentication service — signup and signin flows.

use tokio::task;
use tracing::info;

use crate::error::{AppError, AppResult};
use pinwall_core::auth::password::{hash_password, verify_password};
use pinwall_core::auth::token::issue_token;
use pinwall_core::models::user::{
    DEFAULT_ABOUT, DEFAULT_AVATAR_URL, DEFAULT_NAME, NewUser, User,
};
use pinwall_core::store::{Store, StoreError};
use pinwall_core::validation;

/// Register a new user.
///
/// The payload is validated first, then the password is hashed off the async
/// runtime. Omitted profile fields get the stock defaults. A duplicate email
/// surfaces as a conflict via the store's unique constraint, so there is no
/// check-then-insert race.
pub async fn signup(
    store: &dyn Store,
    email: &str,
    password: &str,
    name: Option<&str>,
    about: Option<&str>,
    avatar_url: Option<&str>,
) -> AppResult<User> {
    validation::validate_signup(email, password, name, about, avatar_url)?;

    let password = password.to_string();
    let password_hash = task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("hash task: {e}")))??;

    let new = NewUser {
        email: email.to_string(),
        password_hash,
        name: name.unwrap_or(DEFAULT_NAME).to_string(),
        about: about.unwrap_or(DEFAULT_ABOUT).to_string(),
        avatar_url: avatar_url.unwrap_or(DEFAULT_AVATAR_URL).to_string(),
    };

    let user = store.create_user(new).await.map_err(|e| match e {
        StoreError::Duplicate { .. } => AppError::Conflict("Email already registered".into()),
        e => AppError::from(e),
    })?;

    info!(user_id = %user.id, "new user registered");
    Ok(user)
}

/// Authenticate with email + password, returning a signed session token.
///
/// Unknown email and wrong password fail with the same message, so the
/// response never reveals whether an account exists.
pub async fn signin(
    store: &dyn Store,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<String> {
    let record = store
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

    let password = password.to_string();
    let hash = record.password_hash.clone();
    let matches = task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("verify task: {e}")))??;

    if !matches {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let token = issue_token(record.user.id, jwt_secret)?;
    info!(user_id = %record.user.id, "session issued");
    Ok(token)
}
