//! Card request handlers.

use axum::Json;
use axum::extract::{Extension, Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::extract::{AppJson, parse_id};
use crate::middleware::auth::AuthenticatedUser;
use crate::services::cards;
use pinwall_core::models::card::Card;

/// Card projection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner_id: Uuid,
    pub liked_by: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            name: card.name,
            link: card.link,
            owner_id: card.owner_id,
            liked_by: card.likes,
            created_at: card.created_at,
        }
    }
}

/// Result body for card mutations (delete, like, unlike).
#[derive(Debug, Serialize)]
pub struct CardActionResponse {
    pub data: CardResponse,
    pub message: String,
}

/// `POST /cards` body.
#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub name: String,
    pub link: String,
}

/// `GET /cards` — list all cards, newest first.
pub async fn list_cards_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CardResponse>>> {
    let cards = cards::list_cards(state.store.as_ref()).await?;
    Ok(Json(cards.into_iter().map(CardResponse::from).collect()))
}

/// `GET /cards/{id}` — fetch one card.
pub async fn get_card_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CardResponse>> {
    let id = parse_id(&id, "card")?;
    let card = cards::get_card(state.store.as_ref(), id).await?;
    Ok(Json(CardResponse::from(card)))
}

/// `POST /cards` — create a card owned by the caller.
pub async fn create_card_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(body): AppJson<CreateCardRequest>,
) -> AppResult<Json<CardResponse>> {
    let card = cards::create_card(state.store.as_ref(), user.0, &body.name, &body.link).await?;
    Ok(Json(CardResponse::from(card)))
}

/// `DELETE /cards/{id}` — delete a card. Owner only.
pub async fn delete_card_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<CardActionResponse>> {
    let id = parse_id(&id, "card")?;
    let card = cards::delete_card(state.store.as_ref(), user.0, id).await?;
    Ok(Json(CardActionResponse {
        data: CardResponse::from(card),
        message: "Card deleted".to_string(),
    }))
}

/// `PUT /cards/{id}/likes` — add the caller to the card's like set.
pub async fn like_card_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<CardActionResponse>> {
    let id = parse_id(&id, "card")?;
    let card = cards::like_card(state.store.as_ref(), user.0, id).await?;
    Ok(Json(CardActionResponse {
        data: CardResponse::from(card),
        message: "Card liked".to_string(),
    }))
}

/// `DELETE /cards/{id}/likes` — remove the caller from the card's like set.
pub async fn unlike_card_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<CardActionResponse>> {
    let id = parse_id(&id, "card")?;
    let card = cards::unlike_card(state.store.as_ref(), user.0, id).await?;
    Ok(Json(CardActionResponse {
        data: CardResponse::from(card),
        message: "Like removed".to_string(),
    }))
}
