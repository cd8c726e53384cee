//! User models

use serde::{Deserialize, Serialize};

/// User account within a realm
///
/// The same type serves as the creation payload for
/// [`AdminApi::create_user`](crate::client::AdminApi::create_user); leave
/// `id` empty there, the server assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Login name
    pub username: String,

    /// Creation time as Unix epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,

    /// Whether the account is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Whether a TOTP credential is configured
    #[serde(default)]
    pub totp: bool,

    /// Whether the email address has been verified
    #[serde(default)]
    pub email_verified: bool,

    /// First name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
