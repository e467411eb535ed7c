//! # pinwall_api
//!
//! HTTP API library for Pinwall.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch, post, put};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, cards, users};
use pinwall_core::store::Store;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Injected store backend (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn Store>,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `pinwall_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    pinwall_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/signup", post(auth::signup_handler))
        .route("/signin", post(auth::signin_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route("/signout", post(auth::signout_handler))
        .route("/users", get(users::list_users_handler))
        .route(
            "/users/me",
            get(users::current_user_handler).patch(users::update_profile_handler),
        )
        .route("/users/me/avatar", patch(users::update_avatar_handler))
        .route("/users/{id}", get(users::get_user_handler))
        .route(
            "/cards",
            get(cards::list_cards_handler).post(cards::create_card_handler),
        )
        .route(
            "/cards/{id}",
            get(cards::get_card_handler).delete(cards::delete_card_handler),
        )
        .route(
            "/cards/{id}/likes",
            put(cards::like_card_handler).delete(cards::unlike_card_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(handlers::fallback_handler)
        .layer(cors)
        .with_state(state)
}
