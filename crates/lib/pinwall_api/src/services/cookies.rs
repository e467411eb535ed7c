//! Cookie service — set/clear the httpOnly session cookie.
//!
//! Signin mirrors the session token into a cookie for browser clients; the
//! API itself authenticates requests via the Authorization header.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use pinwall_core::auth::token::SESSION_TTL_DAYS;

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "pinwall_session";

/// Build a httpOnly cookie carrying the session token (7 days, matching the
/// token expiry).
pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE.to_string(), token.to_string()))
        .http_only(true)
        .secure(false) // TODO: set true in production
        .same_site(SameSite::Lax)
        .path("/".to_string())
        .max_age(Duration::days(SESSION_TTL_DAYS))
        .build()
}

/// Build an expired cookie to clear the session.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE.to_string(), String::new()))
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .path("/".to_string())
        .max_age(Duration::ZERO)
        .build()
}
