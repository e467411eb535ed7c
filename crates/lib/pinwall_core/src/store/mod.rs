//! Store abstraction over the persistent collections.
//!
//! Handlers depend on the [`Store`] trait object injected through app
//! state, so the same routing and service code runs against PostgreSQL in
//! production and against the in-memory backend in tests. Lookups return
//! `Ok(None)` for absent rows; only infrastructure failures are errors.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::card::{Card, NewCard};
use crate::models::user::{NewUser, User, UserWithPassword};

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("duplicate value for {field}")]
    Duplicate { field: &'static str },

    /// Any other backend failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// User collection operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. An already-registered email yields
    /// [`StoreError::Duplicate`].
    async fn create_user(&self, new: NewUser) -> StoreResult<User>;

    /// Fetch a user by id.
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Fetch a user with their password hash by email.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>>;

    /// List all users in registration order.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Update the provided profile fields, returning the updated user.
    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<&str>,
        about: Option<&str>,
    ) -> StoreResult<Option<User>>;

    /// Update the avatar URL, returning the updated user.
    async fn update_avatar(&self, id: Uuid, avatar_url: &str) -> StoreResult<Option<User>>;
}

/// Card collection operations.
///
/// The like mutations are atomic set operations: concurrent calls against
/// the same card must not lose each other's updates.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Insert a new card.
    async fn create_card(&self, new: NewCard) -> StoreResult<Card>;

    /// Fetch a card by id.
    async fn find_card(&self, id: Uuid) -> StoreResult<Option<Card>>;

    /// List all cards, newest first.
    async fn list_cards(&self) -> StoreResult<Vec<Card>>;

    /// Delete a card, reporting whether a row was removed.
    async fn delete_card(&self, id: Uuid) -> StoreResult<bool>;

    /// Add `user_id` to the card's like set (idempotent) and return the
    /// updated card, or `None` when the card does not exist.
    async fn add_like(&self, card_id: Uuid, user_id: Uuid) -> StoreResult<Option<Card>>;

    /// Remove `user_id` from the card's like set (a no-op when absent) and
    /// return the updated card, or `None` when the card does not exist.
    async fn remove_like(&self, card_id: Uuid, user_id: Uuid) -> StoreResult<Option<Card>>;
}

/// The full store surface the API depends on.
pub trait Store: UserStore + CardStore {}

impl<T: UserStore + CardStore> Store for T {}
