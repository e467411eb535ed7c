//! User domain models.
//!
//! These are internal domain models, distinct from API response projections
//! (which rename to camelCase and never expose the password hash).

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Profile defaults applied at signup when the optional fields are omitted.
pub const DEFAULT_NAME: &str = "Jacques-Yves Cousteau";
pub const DEFAULT_ABOUT: &str = "Explorer";
pub const DEFAULT_AVATAR_URL: &str =
    "https://pictures.s3.yandex.net/resources/jacques-cousteau_1604399756.png";

/// Domain user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub about: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

/// User with password hash (for credential checks only).
#[derive(Debug, Clone)]
pub struct UserWithPassword {
    pub user: User,
    pub password_hash: String,
}

/// Input for creating a user. The password is hashed before it gets here.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub about: String,
    pub avatar_url: String,
}
