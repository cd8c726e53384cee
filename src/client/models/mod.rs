//! Keycloak Admin API data models
//!
//! This module contains the domain types returned by the Keycloak Admin API.
//! Models are organized by resource type for easy discovery. Every type is an
//! immutable value snapshot of the wire representation; nothing is mutated
//! after decoding.

mod group;
mod realm_client;
mod role;
mod token;
mod user;

// Re-export all models for convenient access
pub use group::{Group, UserGroup};
pub use realm_client::RealmClient;
pub use role::{Role, RoleMapping};
pub use token::Token;
pub use user::User;
