//! Router-level tests for the card feed, ownership-gated deletion, and the
//! like set.

mod common;

use axum::Router;
use axum::http::StatusCode;
use serde_json::json;

use common::{send_json, signup_and_signin, test_app};

/// Create a card and return its id.
async fn create_card(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/cards",
        Some(token),
        Some(json!({"name": name, "link": "https://images.example.com/peak.jpg"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create card failed: {body}");
    body["id"].as_str().expect("card id").to_string()
}

#[tokio::test]
async fn created_cards_list_newest_first() {
    let app = test_app();
    let (id, token) = signup_and_signin(&app, "author@example.com").await;

    create_card(&app, &token, "older").await;
    create_card(&app, &token, "newer").await;

    let (status, body) = send_json(&app, "GET", "/cards", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let cards = body.as_array().expect("array");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["name"], "newer");
    assert_eq!(cards[1]["name"], "older");
    assert_eq!(cards[0]["ownerId"], id.as_str());
    assert_eq!(cards[0]["likedBy"], json!([]));
    assert!(cards[0]["createdAt"].is_string());
}

#[tokio::test]
async fn card_creation_is_validated() {
    let app = test_app();
    let (_, token) = signup_and_signin(&app, "author@example.com").await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/cards",
        Some(&token),
        Some(json!({"name": "x", "link": "https://example.com/a.jpg"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send_json(
        &app,
        "POST",
        "/cards",
        Some(&token),
        Some(json!({"name": "Fine name", "link": "relative.jpg"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Field 'link' must be a valid URL");
}

#[tokio::test]
async fn card_lookup_distinguishes_bad_ids_from_missing_rows() {
    let app = test_app();
    let (_, token) = signup_and_signin(&app, "author@example.com").await;

    let (status, body) = send_json(&app, "GET", "/cards/not-a-uuid", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid card id");

    let random = uuid::Uuid::new_v4();
    let (status, body) =
        send_json(&app, "GET", &format!("/cards/{random}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Card not found");
}

#[tokio::test]
async fn only_the_owner_may_delete_a_card() {
    let app = test_app();
    let (_, owner_token) = signup_and_signin(&app, "owner@example.com").await;
    let (_, other_token) = signup_and_signin(&app, "other@example.com").await;

    let card_id = create_card(&app, &owner_token, "Contested").await;

    // A non-owner is turned away and the card survives.
    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/cards/{card_id}"),
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Cannot modify a card you don't own");

    let (status, _) = send_json(
        &app,
        "GET",
        &format!("/cards/{card_id}"),
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The owner deletes it, and it is gone for everyone.
    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/cards/{card_id}"),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Card deleted");
    assert_eq!(body["data"]["id"], card_id.as_str());

    let (status, _) = send_json(
        &app,
        "GET",
        &format!("/cards/{card_id}"),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_missing_card_is_not_found() {
    let app = test_app();
    let (_, token) = signup_and_signin(&app, "owner@example.com").await;

    let random = uuid::Uuid::new_v4();
    let (status, _) =
        send_json(&app, "DELETE", &format!("/cards/{random}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn card_mutations_require_a_session() {
    let app = test_app();

    // The gate runs before the id is even parsed.
    let (status, body) = send_json(&app, "DELETE", "/cards/not-a-uuid", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing authorization header");
}

#[tokio::test]
async fn likes_are_idempotent() {
    let app = test_app();
    let (id, token) = signup_and_signin(&app, "fan@example.com").await;
    let card_id = create_card(&app, &token, "Likeable").await;

    for _ in 0..2 {
        let (status, body) = send_json(
            &app,
            "PUT",
            &format!("/cards/{card_id}/likes"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Card liked");
        assert_eq!(body["data"]["likedBy"], json!([id]));
    }
}

#[tokio::test]
async fn anyone_may_like_any_card() {
    let app = test_app();
    let (owner_id, owner_token) = signup_and_signin(&app, "owner@example.com").await;
    let (fan_id, fan_token) = signup_and_signin(&app, "fan@example.com").await;

    let card_id = create_card(&app, &owner_token, "Popular").await;

    // Likes are not owner-gated: the owner and a stranger both count.
    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/cards/{card_id}/likes"),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/cards/{card_id}/likes"),
        Some(&fan_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let liked_by = body["data"]["likedBy"].as_array().expect("array");
    assert_eq!(liked_by.len(), 2);
    assert!(liked_by.contains(&json!(owner_id)));
    assert!(liked_by.contains(&json!(fan_id)));
}

#[tokio::test]
async fn unlike_removes_only_the_caller() {
    let app = test_app();
    let (owner_id, owner_token) = signup_and_signin(&app, "owner@example.com").await;
    let (_, fan_token) = signup_and_signin(&app, "fan@example.com").await;

    let card_id = create_card(&app, &owner_token, "Likeable").await;
    send_json(
        &app,
        "PUT",
        &format!("/cards/{card_id}/likes"),
        Some(&owner_token),
        None,
    )
    .await;

    // Unliking without a prior like succeeds and changes nothing.
    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/cards/{card_id}/likes"),
        Some(&fan_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Like removed");
    assert_eq!(body["data"]["likedBy"], json!([owner_id]));

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/cards/{card_id}/likes"),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["likedBy"], json!([]));
}

#[tokio::test]
async fn liking_a_missing_card_is_not_found() {
    let app = test_app();
    let (_, token) = signup_and_signin(&app, "fan@example.com").await;

    let random = uuid::Uuid::new_v4();
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/cards/{random}/likes"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Card not found");

    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/cards/{random}/likes"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_likes_are_both_recorded() {
    let app = test_app();
    let (_, token_a) = signup_and_signin(&app, "a@example.com").await;
    let (_, token_b) = signup_and_signin(&app, "b@example.com").await;

    let card_id = create_card(&app, &token_a, "Contended").await;
    let uri = format!("/cards/{card_id}/likes");

    let (resp_a, resp_b) = tokio::join!(
        send_json(&app, "PUT", &uri, Some(&token_a), None),
        send_json(&app, "PUT", &uri, Some(&token_b), None),
    );
    assert_eq!(resp_a.0, StatusCode::OK);
    assert_eq!(resp_b.0, StatusCode::OK);

    let (status, body) =
        send_json(&app, "GET", &format!("/cards/{card_id}"), Some(&token_a), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likedBy"].as_array().expect("array").len(), 2);
}
