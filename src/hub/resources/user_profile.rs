//! Profile of the authenticated API client, from `GET /api/v1/whoami`.

use serde::{Deserialize, Serialize};

/// Path of the identity endpoint.
pub const WHOAMI_PATH: &str = "/api/v1/whoami";

/// The Hub user behind the current access token.
///
/// Only `name` is typed. Everything else (IDs, organisation, currency,
/// locale) is kept in `extra` exactly as the Hub returned it, whatever its
/// shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// The user's full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Every other field returned by the Hub.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Returns a raw field of the profile other than `name`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}
