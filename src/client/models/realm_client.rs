//! Realm client models

use serde::{Deserialize, Serialize};

/// Client application registered within a realm
///
/// Distinct from [`KeycloakClient`](crate::client::KeycloakClient), which is
/// the API wrapper itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmClient {
    /// Server-assigned client ID
    pub id: String,

    /// Registered client identifier, e.g. `admin-cli`
    pub client_id: String,

    /// Display name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the client is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Whether the client authenticates without a secret
    #[serde(default)]
    pub public_client: bool,

    /// Authentication protocol, e.g. `openid-connect` (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}
