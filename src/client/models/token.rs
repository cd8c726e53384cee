//! Token-endpoint models

use serde::{Deserialize, Serialize};

/// Bearer token issued by a realm's OpenID Connect token endpoint
///
/// The library never tracks expiry itself; `expires_in` and
/// `refresh_expires_in` are relayed for the caller's own lifecycle handling.
/// An expired token simply yields whatever failure the upstream API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The access token string sent as the bearer credential.
    ///
    /// Defaulted on decode so that a token response missing the field can be
    /// reported as an authentication failure instead of a decode failure.
    #[serde(default)]
    pub access_token: String,

    /// Access token lifetime in seconds
    #[serde(default)]
    pub expires_in: u64,

    /// Refresh token lifetime in seconds
    #[serde(default)]
    pub refresh_expires_in: u64,

    /// Refresh token string
    #[serde(default)]
    pub refresh_token: String,

    /// Token type, `"bearer"` for these grant flows
    #[serde(default)]
    pub token_type: String,

    /// Revocation-policy epoch, present on real Keycloak responses
    #[serde(
        rename = "not-before-policy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub not_before_policy: Option<i64>,

    /// Server-side session identifier (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_state: Option<String>,
}
