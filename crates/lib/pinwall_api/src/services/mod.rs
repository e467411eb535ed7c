//! Services between the handlers and the store.

pub mod auth;
pub mod cards;
pub mod cookies;
pub mod users;
