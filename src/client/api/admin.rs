//! Admin API trait for realm lookup operations

use async_trait::async_trait;

use crate::client::models::{Group, RealmClient, Role, RoleMapping, Token, User, UserGroup};
use crate::error::Result;

/// Realm administration operations for the Keycloak Admin API
///
/// Every lookup takes the bearer token returned by one of the
/// [`AuthApi`](super::AuthApi) grant flows together with the realm name.
/// Realm names and path identifiers are used verbatim in the request path,
/// so callers must pass URL-safe values. Results preserve the order returned
/// by the API.
#[async_trait]
pub trait AdminApi: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// List all users in the realm
    async fn list_users(&self, token: &Token, realm: &str) -> Result<Vec<User>>;

    /// List the groups a user belongs to
    async fn list_user_groups(
        &self,
        token: &Token,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<UserGroup>>;

    /// Create a user in the realm.
    ///
    /// The user's `id` is assigned by the server and should be left empty in
    /// the payload.
    async fn create_user(&self, token: &Token, realm: &str, user: &User) -> Result<()>;

    // ========================================================================
    // Groups
    // ========================================================================

    /// List all groups in the realm
    async fn list_groups(&self, token: &Token, realm: &str) -> Result<Vec<Group>>;

    /// List the per-client role mappings attached to a group.
    ///
    /// The upstream response nests one entry per client under
    /// `clientMappings`; the result is the flattened list of those entries,
    /// ordered by client key. A response without a `clientMappings` object
    /// fails with a decode error.
    async fn group_role_mappings(
        &self,
        token: &Token,
        realm: &str,
        group_id: &str,
    ) -> Result<Vec<RoleMapping>>;

    // ========================================================================
    // Roles
    // ========================================================================

    /// List all realm-level roles
    async fn list_realm_roles(&self, token: &Token, realm: &str) -> Result<Vec<Role>>;

    /// List the roles defined by a specific client
    async fn list_client_roles(
        &self,
        token: &Token,
        realm: &str,
        client_id: &str,
    ) -> Result<Vec<Role>>;

    // ========================================================================
    // Clients
    // ========================================================================

    /// List all client applications registered in the realm
    async fn list_clients(&self, token: &Token, realm: &str) -> Result<Vec<RealmClient>>;
}
