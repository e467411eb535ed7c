//! In-memory store backend.
//!
//! Backs the integration tests and the server's `--memory` mode. All
//! collections live behind one write lock, so the like-set mutations are
//! atomic without further ceremony.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CardStore, StoreError, StoreResult, UserStore};
use crate::models::card::{Card, NewCard};
use crate::models::user::{NewUser, User, UserWithPassword};
use crate::uuid::uuidv7;

#[derive(Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Clone)]
struct StoredCard {
    id: Uuid,
    name: String,
    link: String,
    owner_id: Uuid,
    likes: BTreeSet<Uuid>,
    created_at: DateTime<Utc>,
}

impl StoredCard {
    fn to_card(&self) -> Card {
        Card {
            id: self.id,
            name: self.name.clone(),
            link: self.link.clone(),
            owner_id: self.owner_id,
            likes: self.likes.iter().copied().collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Default)]
struct Collections {
    /// Registration order, so listing needs no sort.
    users: Vec<StoredUser>,
    /// Keyed by UUIDv7, so reverse key order is newest-first.
    cards: BTreeMap<Uuid, StoredCard>,
}

/// Store backend held entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> StoreResult<User> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.user.email == new.email) {
            return Err(StoreError::Duplicate { field: "email" });
        }
        let user = User {
            id: Uuid::new_v4(),
            email: new.email,
            name: new.name,
            about: new.about,
            avatar_url: new.avatar_url,
            created_at: Utc::now(),
        };
        inner.users.push(StoredUser {
            user: user.clone(),
            password_hash: new.password_hash,
        });
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.user.clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .find(|u| u.user.email == email)
            .map(|u| UserWithPassword {
                user: u.user.clone(),
                password_hash: u.password_hash.clone(),
            }))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().map(|u| u.user.clone()).collect())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<&str>,
        about: Option<&str>,
    ) -> StoreResult<Option<User>> {
        let mut inner = self.inner.write().await;
        let Some(stored) = inner.users.iter_mut().find(|u| u.user.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            stored.user.name = name.to_string();
        }
        if let Some(about) = about {
            stored.user.about = about.to_string();
        }
        Ok(Some(stored.user.clone()))
    }

    async fn update_avatar(&self, id: Uuid, avatar_url: &str) -> StoreResult<Option<User>> {
        let mut inner = self.inner.write().await;
        let Some(stored) = inner.users.iter_mut().find(|u| u.user.id == id) else {
            return Ok(None);
        };
        stored.user.avatar_url = avatar_url.to_string();
        Ok(Some(stored.user.clone()))
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn create_card(&self, new: NewCard) -> StoreResult<Card> {
        let mut inner = self.inner.write().await;
        let stored = StoredCard {
            id: uuidv7(),
            name: new.name,
            link: new.link,
            owner_id: new.owner_id,
            likes: BTreeSet::new(),
            created_at: Utc::now(),
        };
        let card = stored.to_card();
        inner.cards.insert(stored.id, stored);
        Ok(card)
    }

    async fn find_card(&self, id: Uuid) -> StoreResult<Option<Card>> {
        let inner = self.inner.read().await;
        Ok(inner.cards.get(&id).map(StoredCard::to_card))
    }

    async fn list_cards(&self) -> StoreResult<Vec<Card>> {
        let inner = self.inner.read().await;
        Ok(inner.cards.values().rev().map(StoredCard::to_card).collect())
    }

    async fn delete_card(&self, id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.cards.remove(&id).is_some())
    }

    async fn add_like(&self, card_id: Uuid, user_id: Uuid) -> StoreResult<Option<Card>> {
        let mut inner = self.inner.write().await;
        let Some(card) = inner.cards.get_mut(&card_id) else {
            return Ok(None);
        };
        card.likes.insert(user_id);
        Ok(Some(card.to_card()))
    }

    async fn remove_like(&self, card_id: Uuid, user_id: Uuid) -> StoreResult<Option<Card>> {
        let mut inner = self.inner.write().await;
        let Some(card) = inner.cards.get_mut(&card_id) else {
            return Ok(None);
        };
        card.likes.remove(&user_id);
        Ok(Some(card.to_card()))
    }
}
