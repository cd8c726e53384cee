//! Async client library for the Keycloak Admin REST API
//!
//! The crate exposes a single [`KeycloakClient`] that authenticates against a
//! realm's token endpoint and performs typed admin lookups. All operations are
//! request-scoped: the client holds only a base URL and an HTTP transport, so
//! one value can be shared freely across concurrent tasks.
//!
//! # Example
//!
//! ```no_run
//! use keycloak_admin::{AuthApi, AdminApi, KeycloakClient};
//!
//! # async fn run() -> keycloak_admin::Result<()> {
//! let client = KeycloakClient::new("http://localhost:8080")?;
//! let token = client.login("admin", "secret", "master").await?;
//! let users = client.list_users(&token, "master").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::models::{Group, RealmClient, Role, RoleMapping, Token, User, UserGroup};
pub use client::{AdminApi, AuthApi, KeycloakApi, KeycloakClient};
pub use error::{ApiError, Error, Result};
