//! Keycloak Admin API client

pub mod api;
pub mod keycloak;
pub mod models;

#[cfg(test)]
pub mod mock;

pub use api::{AdminApi, AuthApi};
pub use keycloak::KeycloakClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockKeycloakClient;

/// Full Keycloak Admin API surface
///
/// Combines the focused sub-traits; implemented for every complete client,
/// so callers that need both grant flows and admin lookups can hold a single
/// `dyn KeycloakApi`.
pub trait KeycloakApi: AuthApi + AdminApi {}

impl<T: AuthApi + AdminApi> KeycloakApi for T {}
