//! Domain models.

pub mod card;
pub mod user;
