//! PostgreSQL store backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{CardStore, StoreError, StoreResult, UserStore};
use crate::models::card::{Card, NewCard};
use crate::models::user::{NewUser, User, UserWithPassword};
use crate::uuid::uuidv7;

/// Store backend over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    about: String,
    avatar_url: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            about: row.about,
            avatar_url: row.avatar_url,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    #[sqlx(flatten)]
    user: UserRow,
    password_hash: String,
}

/// Card row with its like set aggregated from `card_likes`.
#[derive(sqlx::FromRow)]
struct CardRow {
    id: Uuid,
    name: String,
    link: String,
    owner_id: Uuid,
    likes: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<CardRow> for Card {
    fn from(row: CardRow) -> Self {
        Card {
            id: row.id,
            name: row.name,
            link: row.link,
            owner_id: row.owner_id,
            likes: row.likes,
            created_at: row.created_at,
        }
    }
}

const USER_COLUMNS: &str = "id, email, name, about, avatar_url, created_at";

const CARD_SELECT: &str = "SELECT c.id, c.name, c.link, c.owner_id, c.created_at, \
       COALESCE(array_agg(l.user_id) FILTER (WHERE l.user_id IS NOT NULL), '{}') AS likes \
     FROM cards c \
     LEFT JOIN card_likes l ON l.card_id = c.id";

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, new: NewUser) -> StoreResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, password_hash, name, about, avatar_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, email, name, about, avatar_url, created_at",
        )
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(&new.name)
        .bind(&new.about)
        .bind(&new.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate { field: "email" }
            }
            e => StoreError::Database(e),
        })?;
        Ok(row.into())
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>> {
        let row = sqlx::query_as::<_, CredentialsRow>(&format!(
            "SELECT {USER_COLUMNS}, password_hash FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| UserWithPassword {
            user: r.user.into(),
            password_hash: r.password_hash,
        }))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<&str>,
        about: Option<&str>,
    ) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET name = COALESCE($2, name), about = COALESCE($3, about) \
             WHERE id = $1 \
             RETURNING id, email, name, about, avatar_url, created_at",
        )
        .bind(id)
        .bind(name)
        .bind(about)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn update_avatar(&self, id: Uuid, avatar_url: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET avatar_url = $2 WHERE id = $1 \
             RETURNING id, email, name, about, avatar_url, created_at",
        )
        .bind(id)
        .bind(avatar_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }
}

#[async_trait]
impl CardStore for PgStore {
    async fn create_card(&self, new: NewCard) -> StoreResult<Card> {
        let (id, name, link, owner_id, created_at) =
            sqlx::query_as::<_, (Uuid, String, String, Uuid, DateTime<Utc>)>(
                "INSERT INTO cards (id, name, link, owner_id) VALUES ($1, $2, $3, $4) \
                 RETURNING id, name, link, owner_id, created_at",
            )
            .bind(uuidv7())
            .bind(&new.name)
            .bind(&new.link)
            .bind(new.owner_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(Card {
            id,
            name,
            link,
            owner_id,
            likes: Vec::new(),
            created_at,
        })
    }

    async fn find_card(&self, id: Uuid) -> StoreResult<Option<Card>> {
        let row = sqlx::query_as::<_, CardRow>(&format!(
            "{CARD_SELECT} WHERE c.id = $1 GROUP BY c.id"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Card::from))
    }

    async fn list_cards(&self) -> StoreResult<Vec<Card>> {
        let rows = sqlx::query_as::<_, CardRow>(&format!(
            "{CARD_SELECT} GROUP BY c.id ORDER BY c.created_at DESC, c.id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Card::from).collect())
    }

    async fn delete_card(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn add_like(&self, card_id: Uuid, user_id: Uuid) -> StoreResult<Option<Card>> {
        // ON CONFLICT DO NOTHING makes repeat likes idempotent; liking a
        // vanished card trips the foreign key instead, which is just "no
        // such card" to the caller.
        let inserted = sqlx::query(
            "INSERT INTO card_likes (card_id, user_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(card_id)
        .bind(user_id)
        .execute(&self.pool)
        .await;
        match inserted {
            Ok(_) => self.find_card(card_id).await,
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Ok(None),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    async fn remove_like(&self, card_id: Uuid, user_id: Uuid) -> StoreResult<Option<Card>> {
        sqlx::query("DELETE FROM card_likes WHERE card_id = $1 AND user_id = $2")
            .bind(card_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        self.find_card(card_id).await
    }
}
