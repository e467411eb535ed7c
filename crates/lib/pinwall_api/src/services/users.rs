//! User profile service.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use pinwall_core::models::user::User;
use pinwall_core::store::Store;
use pinwall_core::validation;

/// List every registered user.
pub async fn list_users(store: &dyn Store) -> AppResult<Vec<User>> {
    Ok(store.list_users().await?)
}

/// Fetch one user or fail with a 404.
pub async fn get_user(store: &dyn Store, id: Uuid) -> AppResult<User> {
    store
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}

/// Update the caller's name and/or about line. Provided fields are
/// validated; omitted fields keep their stored value.
pub async fn update_profile(
    store: &dyn Store,
    id: Uuid,
    name: Option<&str>,
    about: Option<&str>,
) -> AppResult<User> {
    validation::validate_profile_update(name, about)?;
    store
        .update_profile(id, name, about)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}

/// Update the caller's avatar URL.
pub async fn update_avatar(store: &dyn Store, id: Uuid, avatar_url: &str) -> AppResult<User> {
    validation::validate_avatar(avatar_url)?;
    store
        .update_avatar(id, avatar_url)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}
