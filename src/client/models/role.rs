//! Role and role-mapping models

use serde::{Deserialize, Serialize};

/// Role definition, either realm-level or scoped to a client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role ID
    pub id: String,

    /// Role name
    pub name: String,

    /// Human-readable description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the role is composed of other roles
    #[serde(default)]
    pub composite: bool,

    /// Whether the role is scoped to a client rather than the realm
    #[serde(default)]
    pub client_role: bool,

    /// ID of the realm or client containing the role (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,

    /// Whether a scope parameter is required to obtain the role
    #[serde(default)]
    pub scope_param_required: bool,
}

/// Roles a single client contributes to a group's role mappings
///
/// One record per entry of the upstream `clientMappings` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMapping {
    /// Client ID (optional, not all server versions include it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Client name the mappings belong to (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    /// Roles mapped through this client
    pub mappings: Vec<Role>,
}
