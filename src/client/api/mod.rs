//! API trait definitions split by responsibility
//!
//! This module organizes the Keycloak Admin API surface into focused
//! sub-traits:
//! - [`AuthApi`] - Token-endpoint grant flows
//! - [`AdminApi`] - Realm administration lookups and user creation
//!
//! The [`KeycloakApi`](super::KeycloakApi) super-trait combines both.

mod admin;
mod auth;

pub use admin::AdminApi;
pub use auth::AuthApi;
