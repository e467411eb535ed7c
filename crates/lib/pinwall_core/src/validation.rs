//! Field validation for user and card payloads.
//!
//! Every write path runs these checks before touching the store, so the
//! same payload rules hold for creates and updates alike.

use thiserror::Error;
use url::Url;

/// Bounds for user names and card names.
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 30;
/// Bounds for the profile about line.
const ABOUT_MIN: usize = 2;
const ABOUT_MAX: usize = 200;
/// Minimum password length accepted at signup.
const PASSWORD_MIN: usize = 8;

/// A field-level validation failure. The message is user-facing.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Validate a signup payload. Optional fields are only checked when present.
pub fn validate_signup(
    email: &str,
    password: &str,
    name: Option<&str>,
    about: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<(), ValidationError> {
    email_address(email)?;
    if password.chars().count() < PASSWORD_MIN {
        return Err(ValidationError::new(format!(
            "Password must be at least {PASSWORD_MIN} characters"
        )));
    }
    if let Some(name) = name {
        length_between("name", name, NAME_MIN, NAME_MAX)?;
    }
    if let Some(about) = about {
        length_between("about", about, ABOUT_MIN, ABOUT_MAX)?;
    }
    if let Some(avatar_url) = avatar_url {
        absolute_url("avatarUrl", avatar_url)?;
    }
    Ok(())
}

/// Validate a profile update. Omitted fields keep their stored value and
/// are not checked.
pub fn validate_profile_update(
    name: Option<&str>,
    about: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        length_between("name", name, NAME_MIN, NAME_MAX)?;
    }
    if let Some(about) = about {
        length_between("about", about, ABOUT_MIN, ABOUT_MAX)?;
    }
    Ok(())
}

/// Validate an avatar update.
pub fn validate_avatar(avatar_url: &str) -> Result<(), ValidationError> {
    absolute_url("avatarUrl", avatar_url)
}

/// Validate a new card payload.
pub fn validate_new_card(name: &str, link: &str) -> Result<(), ValidationError> {
    length_between("name", name, NAME_MIN, NAME_MAX)?;
    absolute_url("link", link)
}

/// Character-count bounds check (not bytes, so multibyte names count fairly).
fn length_between(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::new(format!(
            "Field '{field}' must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Require an absolute URL with a host.
fn absolute_url(field: &str, value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(ValidationError::new(format!(
            "Field '{field}' must be a valid URL"
        ))),
    }
}

/// Light email shape check: one `@`, non-empty local part, dotted domain.
fn email_address(value: &str) -> Result<(), ValidationError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(
            "Field 'email' must be a valid email address",
        ))
    }
}
