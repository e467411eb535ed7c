//! # pinwall_core
//!
//! Core domain logic for Pinwall.

pub mod auth;
pub mod migrate;
pub mod models;
pub mod store;
pub mod uuid;
pub mod validation;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
