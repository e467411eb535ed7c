//! Card domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Domain card. `likes` has set semantics and never holds duplicates.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner_id: Uuid,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Whether the given user created this card.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

/// Input for creating a card.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub name: String,
    pub link: String,
    pub owner_id: Uuid,
}
