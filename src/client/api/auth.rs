//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::Token;
use crate::error::Result;

/// Token-endpoint grant flows for a Keycloak realm
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Perform a password-grant login as the `admin-cli` client.
    ///
    /// A non-success response from the token endpoint, or a success body
    /// without an `access_token`, fails with an authentication error rather
    /// than returning an empty token.
    async fn login(&self, username: &str, password: &str, realm: &str) -> Result<Token>;

    /// Perform a password-grant login authenticated as a confidential client.
    ///
    /// The client id and secret are sent as an HTTP Basic `Authorization`
    /// header; both must be non-empty.
    async fn direct_grant_login(
        &self,
        client_id: &str,
        client_secret: &str,
        realm: &str,
        username: &str,
        password: &str,
    ) -> Result<Token>;
}
