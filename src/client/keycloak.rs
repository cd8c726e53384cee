//! Keycloak Admin API client implementation

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::{AdminApi, AuthApi};
use super::models::{Group, RealmClient, Role, RoleMapping, Token, User, UserGroup};
use crate::error::{ApiError, Result};

/// Client id used for password-grant logins against the admin CLI client
const ADMIN_CLI_CLIENT_ID: &str = "admin-cli";

/// Default request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP Basic `Authorization` value from a client id and secret
fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    use base64::{Engine as _, engine::general_purpose};

    let credential = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", general_purpose::STANDARD.encode(credential))
}

/// Keycloak Admin API client
///
/// Holds only the base URL and the HTTP transport, so a single value is safe
/// to share read-only across concurrent callers. Every operation is
/// request-scoped; nothing is cached or retried.
pub struct KeycloakClient {
    http: HttpClient,
    base_url: String,
}

impl KeycloakClient {
    /// Create a client for the given server base URL, e.g.
    /// `http://localhost:8080`, with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self::with_http_client(base_url, http))
    }

    /// Create a client using a caller-supplied transport.
    ///
    /// Lets callers control timeouts, proxies, and TLS settings, and lets
    /// tests point the client at a local mock server.
    pub fn with_http_client(base_url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// POST to a realm's token endpoint and decode the grant response.
    ///
    /// A non-success status logs the raw body as a diagnostic and fails with
    /// an authentication error, as does a success body whose `access_token`
    /// is missing or empty.
    async fn token_request(
        &self,
        realm: &str,
        form: &[(&str, &str)],
        basic_auth: Option<String>,
    ) -> Result<Token> {
        let url = format!(
            "{}/auth/realms/{}/protocol/openid-connect/token",
            self.base_url, realm
        );
        log::debug!("POST {}", url);

        let mut request = self.http.post(&url).form(form);
        if let Some(credential) = basic_auth {
            request = request.header(AUTHORIZATION, credential);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            log::warn!("token request for realm {} failed ({}): {}", realm, status, body);
            return Err(ApiError::AuthenticationFailed.into());
        }

        let token: Token = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse token response: {}", e))
        })?;

        if token.access_token.is_empty() {
            return Err(ApiError::AuthenticationFailed.into());
        }

        Ok(token)
    }

    /// GET an admin resource with the bearer token and decode the JSON body.
    ///
    /// Status codes are not interpreted here; an error-shaped body fails the
    /// decode and surfaces as an invalid-response error.
    async fn admin_get<T: DeserializeOwned>(&self, token: &Token, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token.access_token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;

        response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

#[async_trait]
impl AuthApi for KeycloakClient {
    async fn login(&self, username: &str, password: &str, realm: &str) -> Result<Token> {
        let form = [
            ("client_id", ADMIN_CLI_CLIENT_ID),
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
        ];

        self.token_request(realm, &form, None).await
    }

    async fn direct_grant_login(
        &self,
        client_id: &str,
        client_secret: &str,
        realm: &str,
        username: &str,
        password: &str,
    ) -> Result<Token> {
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(ApiError::InvalidCredentials.into());
        }

        let form = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
        ];
        let credential = basic_auth_header(client_id, client_secret);

        self.token_request(realm, &form, Some(credential)).await
    }
}

#[async_trait]
impl AdminApi for KeycloakClient {
    async fn list_users(&self, token: &Token, realm: &str) -> Result<Vec<User>> {
        let path = format!("/auth/admin/realms/{}/users", realm);
        self.admin_get(token, &path).await
    }

    async fn list_user_groups(
        &self,
        token: &Token,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<UserGroup>> {
        let path = format!("/auth/admin/realms/{}/users/{}/groups", realm, user_id);
        self.admin_get(token, &path).await
    }

    async fn create_user(&self, token: &Token, realm: &str, user: &User) -> Result<()> {
        let url = format!("{}/auth/admin/realms/{}/users", self.base_url, realm);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token.access_token))
            .json(user)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::BadRequest(format!("{}: {}", status, body)).into());
        }

        Ok(())
    }

    async fn list_groups(&self, token: &Token, realm: &str) -> Result<Vec<Group>> {
        let path = format!("/auth/admin/realms/{}/groups", realm);
        self.admin_get(token, &path).await
    }

    async fn group_role_mappings(
        &self,
        token: &Token,
        realm: &str,
        group_id: &str,
    ) -> Result<Vec<RoleMapping>> {
        #[derive(Deserialize)]
        struct RoleMappingsResponse {
            // BTreeMap keeps the flattened output independent of the
            // decoder's key order and deterministic for callers.
            #[serde(rename = "clientMappings")]
            client_mappings: BTreeMap<String, RoleMapping>,
        }

        let path = format!("/auth/admin/realms/{}/groups/{}/role-mappings", realm, group_id);
        let response: RoleMappingsResponse = self.admin_get(token, &path).await?;

        Ok(response.client_mappings.into_values().collect())
    }

    async fn list_realm_roles(&self, token: &Token, realm: &str) -> Result<Vec<Role>> {
        let path = format!("/auth/admin/realms/{}/roles", realm);
        self.admin_get(token, &path).await
    }

    async fn list_client_roles(
        &self,
        token: &Token,
        realm: &str,
        client_id: &str,
    ) -> Result<Vec<Role>> {
        let path = format!("/auth/admin/realms/{}/clients/{}/roles", realm, client_id);
        self.admin_get(token, &path).await
    }

    async fn list_clients(&self, token: &Token, realm: &str) -> Result<Vec<RealmClient>> {
        let path = format!("/auth/admin/realms/{}/clients", realm);
        self.admin_get(token, &path).await
    }
}
