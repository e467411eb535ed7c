//! Card service — CRUD plus the like set and the ownership rule.

use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use pinwall_core::models::card::{Card, NewCard};
use pinwall_core::store::Store;
use pinwall_core::validation;

/// List all cards, newest first.
pub async fn list_cards(store: &dyn Store) -> AppResult<Vec<Card>> {
    Ok(store.list_cards().await?)
}

/// Fetch one card or fail with a 404.
pub async fn get_card(store: &dyn Store, id: Uuid) -> AppResult<Card> {
    store
        .find_card(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".into()))
}

/// Create a card owned by the caller.
pub async fn create_card(
    store: &dyn Store,
    owner_id: Uuid,
    name: &str,
    link: &str,
) -> AppResult<Card> {
    validation::validate_new_card(name, link)?;
    let card = store
        .create_card(NewCard {
            name: name.to_string(),
            link: link.to_string(),
            owner_id,
        })
        .await?;
    info!(card_id = %card.id, owner_id = %owner_id, "card created");
    Ok(card)
}

/// Permit a destructive card mutation only to the card's owner.
pub fn authorize_card_mutation(card: &Card, subject_id: Uuid) -> Result<(), AppError> {
    if card.is_owned_by(subject_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Cannot modify a card you don't own".into(),
        ))
    }
}

/// Delete a card: fetch or 404, check ownership, then remove.
pub async fn delete_card(store: &dyn Store, subject_id: Uuid, id: Uuid) -> AppResult<Card> {
    let card = get_card(store, id).await?;
    authorize_card_mutation(&card, subject_id)?;
    // The row can vanish between the fetch and the delete. That is still a
    // missing card, not a server fault.
    if !store.delete_card(id).await? {
        return Err(AppError::NotFound("Card not found".into()));
    }
    info!(card_id = %id, "card deleted");
    Ok(card)
}

/// Add the caller to the card's like set. Idempotent, and deliberately not
/// owner-gated: anyone may like any card, including their own.
pub async fn like_card(store: &dyn Store, subject_id: Uuid, id: Uuid) -> AppResult<Card> {
    store
        .add_like(id, subject_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".into()))
}

/// Remove the caller from the card's like set. Succeeds even when the
/// caller never liked the card.
pub async fn unlike_card(store: &dyn Store, subject_id: Uuid, id: Uuid) -> AppResult<Card> {
    store
        .remove_like(id, subject_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".into()))
}
