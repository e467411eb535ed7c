//! User request handlers.

use axum::Json;
use axum::extract::{Extension, Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::extract::{AppJson, parse_id};
use crate::middleware::auth::AuthenticatedUser;
use crate::services::users;
use pinwall_core::models::user::User;

/// Public user projection. Never carries the email or the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub about: String,
    pub avatar_url: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            about: user.about,
            avatar_url: user.avatar_url,
        }
    }
}

/// `PATCH /users/me` body. Omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub about: Option<String>,
}

/// `PATCH /users/me/avatar` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvatarRequest {
    pub avatar_url: String,
}

/// `GET /users` — list all users in registration order.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = users::list_users(state.store.as_ref()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// `GET /users/me` — the caller's own profile.
pub async fn current_user_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<UserResponse>> {
    let found = users::get_user(state.store.as_ref(), user.0).await?;
    Ok(Json(UserResponse::from(found)))
}

/// `GET /users/{id}` — fetch one user.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_id(&id, "user")?;
    let found = users::get_user(state.store.as_ref(), id).await?;
    Ok(Json(UserResponse::from(found)))
}

/// `PATCH /users/me` — update the caller's name and/or about line.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(body): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let updated = users::update_profile(
        state.store.as_ref(),
        user.0,
        body.name.as_deref(),
        body.about.as_deref(),
    )
    .await?;
    Ok(Json(UserResponse::from(updated)))
}

/// `PATCH /users/me/avatar` — update the caller's avatar.
pub async fn update_avatar_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(body): AppJson<UpdateAvatarRequest>,
) -> AppResult<Json<UserResponse>> {
    let updated = users::update_avatar(state.store.as_ref(), user.0, &body.avatar_url).await?;
    Ok(Json(UserResponse::from(updated)))
}
