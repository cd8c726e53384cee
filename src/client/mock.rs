//! Mock Keycloak API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! without making real HTTP calls.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::api::{AdminApi, AuthApi};
use super::models::{Group, RealmClient, Role, RoleMapping, Token, User, UserGroup};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use through the
/// [`KeycloakApi`](super::KeycloakApi) trait. Locks are only held for the
/// duration of a clone, never across an await point.
#[derive(Default)]
pub struct MockKeycloakClient {
    /// Token returned by both grant flows
    token: Arc<Mutex<Option<Token>>>,
    /// Users to return from list_users
    users: Arc<Mutex<Vec<User>>>,
    /// Group memberships to return from list_user_groups
    user_groups: Arc<Mutex<Vec<UserGroup>>>,
    /// Groups to return from list_groups
    groups: Arc<Mutex<Vec<Group>>>,
    /// Role mappings to return from group_role_mappings
    role_mappings: Arc<Mutex<Vec<RoleMapping>>>,
    /// Roles to return from list_realm_roles and list_client_roles
    roles: Arc<Mutex<Vec<Role>>>,
    /// Clients to return from list_clients
    clients: Arc<Mutex<Vec<RealmClient>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Users captured by create_user for test assertions
    created_users: Arc<Mutex<Vec<User>>>,
}

impl MockKeycloakClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(self, token: Token) -> Self {
        *self.token.lock().unwrap() = Some(token);
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().unwrap() = users;
        self
    }

    pub fn with_user_groups(self, user_groups: Vec<UserGroup>) -> Self {
        *self.user_groups.lock().unwrap() = user_groups;
        self
    }

    pub fn with_groups(self, groups: Vec<Group>) -> Self {
        *self.groups.lock().unwrap() = groups;
        self
    }

    pub fn with_role_mappings(self, role_mappings: Vec<RoleMapping>) -> Self {
        *self.role_mappings.lock().unwrap() = role_mappings;
        self
    }

    pub fn with_roles(self, roles: Vec<Role>) -> Self {
        *self.roles.lock().unwrap() = roles;
        self
    }

    pub fn with_clients(self, clients: Vec<RealmClient>) -> Self {
        *self.clients.lock().unwrap() = clients;
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Users that were passed to create_user, in call order
    pub fn created_users(&self) -> Vec<User> {
        self.created_users.lock().unwrap().clone()
    }

    /// Take the injected error, if one is pending
    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error.lock().unwrap().take() {
            return Err(err.into());
        }
        Ok(())
    }

    fn stored_token(&self) -> Result<Token> {
        self.check_error()?;
        self.token
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::AuthenticationFailed.into())
    }
}

#[async_trait]
impl AuthApi for MockKeycloakClient {
    async fn login(&self, _username: &str, _password: &str, _realm: &str) -> Result<Token> {
        self.stored_token()
    }

    async fn direct_grant_login(
        &self,
        client_id: &str,
        client_secret: &str,
        _realm: &str,
        _username: &str,
        _password: &str,
    ) -> Result<Token> {
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(ApiError::InvalidCredentials.into());
        }
        self.stored_token()
    }
}

#[async_trait]
impl AdminApi for MockKeycloakClient {
    async fn list_users(&self, _token: &Token, _realm: &str) -> Result<Vec<User>> {
        self.check_error()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn list_user_groups(
        &self,
        _token: &Token,
        _realm: &str,
        _user_id: &str,
    ) -> Result<Vec<UserGroup>> {
        self.check_error()?;
        Ok(self.user_groups.lock().unwrap().clone())
    }

    async fn create_user(&self, _token: &Token, _realm: &str, user: &User) -> Result<()> {
        self.check_error()?;
        self.created_users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn list_groups(&self, _token: &Token, _realm: &str) -> Result<Vec<Group>> {
        self.check_error()?;
        Ok(self.groups.lock().unwrap().clone())
    }

    async fn group_role_mappings(
        &self,
        _token: &Token,
        _realm: &str,
        _group_id: &str,
    ) -> Result<Vec<RoleMapping>> {
        self.check_error()?;
        Ok(self.role_mappings.lock().unwrap().clone())
    }

    async fn list_realm_roles(&self, _token: &Token, _realm: &str) -> Result<Vec<Role>> {
        self.check_error()?;
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn list_client_roles(
        &self,
        _token: &Token,
        _realm: &str,
        _client_id: &str,
    ) -> Result<Vec<Role>> {
        self.check_error()?;
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn list_clients(&self, _token: &Token, _realm: &str) -> Result<Vec<RealmClient>> {
        self.check_error()?;
        Ok(self.clients.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::KeycloakApi;
    use crate::client::fixtures::{GroupBuilder, RoleBuilder, UserBuilder, role_mapping, test_token};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_usable_as_trait_object() {
        let mock = MockKeycloakClient::new()
            .with_token(test_token())
            .with_users(vec![UserBuilder::new("u1").build()]);
        let api: &dyn KeycloakApi = &mock;

        let token = api.login("admin", "secret", "master").await.unwrap();
        let users = api.list_users(&token, "master").await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "u1");
    }

    #[tokio::test]
    async fn test_mock_login_without_token_is_auth_failure() {
        let mock = MockKeycloakClient::new();

        let err = mock.login("admin", "wrong", "master").await.unwrap_err();
        match err {
            Error::Api(ApiError::AuthenticationFailed) => (),
            other => panic!("Expected AuthenticationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_error_injection_consumed_on_first_use() {
        let mock = MockKeycloakClient::new()
            .with_roles(vec![RoleBuilder::new("r1").build()])
            .with_error(ApiError::Network("boom".to_string()));

        let token = test_token();
        assert!(mock.list_realm_roles(&token, "master").await.is_err());
        // Second call succeeds; the injected error is one-shot.
        let roles = mock.list_realm_roles(&token, "master").await.unwrap();
        assert_eq!(roles.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_returns_configured_groups_and_mappings() {
        let admin = RoleBuilder::new("r1").name("admin").build();
        let mock = MockKeycloakClient::new()
            .with_groups(vec![GroupBuilder::new("g1").name("staff").build()])
            .with_role_mappings(vec![role_mapping("app-a", vec![admin])]);
        let token = test_token();

        let groups = mock.list_groups(&token, "master").await.unwrap();
        assert_eq!(groups[0].path, "/staff");

        let mappings = mock.group_role_mappings(&token, "master", "g1").await.unwrap();
        assert_eq!(mappings[0].client.as_deref(), Some("app-a"));
        assert_eq!(mappings[0].mappings[0].name, "admin");
    }

    #[tokio::test]
    async fn test_mock_captures_created_users() {
        let mock = MockKeycloakClient::new();
        let token = test_token();
        let user = UserBuilder::new("").username("new-user").build();

        mock.create_user(&token, "master", &user).await.unwrap();

        let created = mock.created_users();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].username, "new-user");
    }
}
