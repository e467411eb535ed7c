//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::users::UserResponse;
use crate::services::{auth, cookies};

/// `POST /signup` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub about: Option<String>,
    pub avatar_url: Option<String>,
}

/// `POST /signin` body.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// `POST /signin` response.
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token: String,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /signup` — register a new user.
pub async fn signup_handler(
    State(state): State<AppState>,
    AppJson(body): AppJson<SignupRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = auth::signup(
        state.store.as_ref(),
        &body.email,
        &body.password,
        body.name.as_deref(),
        body.about.as_deref(),
        body.avatar_url.as_deref(),
    )
    .await?;
    Ok(Json(UserResponse::from(user)))
}

/// `POST /signin` — authenticate with email + password. The issued token is
/// returned in the body and mirrored into the session cookie.
pub async fn signin_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(body): AppJson<SigninRequest>,
) -> AppResult<(CookieJar, Json<SigninResponse>)> {
    let token = auth::signin(
        state.store.as_ref(),
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    let jar = jar.add(cookies::session_cookie(&token));
    Ok((jar, Json(SigninResponse { token })))
}

/// `POST /signout` — clear the session cookie. Issued tokens stay valid
/// until expiry; there is no server-side revocation list.
pub async fn signout_handler(jar: CookieJar) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let jar = jar.add(cookies::clear_session_cookie());
    Ok((
        jar,
        Json(MessageResponse {
            message: "Signed out".to_string(),
        }),
    ))
}
