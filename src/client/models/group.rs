//! Group models

use serde::{Deserialize, Serialize};

/// Group within a realm
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group ID
    pub id: String,

    /// Group name
    pub name: String,

    /// Slash-separated path from the realm root
    #[serde(default)]
    pub path: String,

    /// Nested child groups (optional, absent on flat listings)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_groups: Vec<Group>,
}

/// A user's membership in a group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    /// Group ID
    pub id: String,

    /// Group name
    pub name: String,

    /// Slash-separated path from the realm root
    #[serde(default)]
    pub path: String,
}
