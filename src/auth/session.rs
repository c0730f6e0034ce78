//! Session management for Hub API authentication.
//!
//! This module provides the [`Session`] type holding the bearer token issued
//! by the client-credentials exchange, and the [`AccessTokenResponse`] wire
//! type it is built from.

use std::fmt;

use crate::config::BaseUrl;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Token type assumed when the server omits `token_type`.
const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Response body of the OAuth token endpoint.
///
/// `access_token` defaults to an empty string so that a response missing the
/// token can be told apart from a malformed one.
#[derive(Clone, Deserialize)]
pub struct AccessTokenResponse {
    /// The issued bearer token.
    #[serde(default)]
    pub access_token: String,

    /// The token type, normally `"Bearer"`.
    #[serde(default)]
    pub token_type: Option<String>,

    /// Lifetime of the token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,

    /// Granted scope, either a space-delimited string or a list.
    #[serde(default)]
    pub scope: Option<serde_json::Value>,
}

impl fmt::Debug for AccessTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenResponse")
            .field("access_token", &"*****")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// An authenticated session against one Hub instance.
///
/// Sessions are created once by the token exchange and never mutated. The
/// access token is masked in `Debug` output.
///
/// # Example
///
/// ```rust
/// use hub_api::{BaseUrl, Session};
///
/// let session = Session::new(
///     BaseUrl::new("https://hub.example.com").unwrap(),
///     "access-token".to_string(),
///     None,
/// );
///
/// assert!(session.is_active());
/// assert!(!session.expired());
/// assert_eq!(session.authorization_header(), "Bearer access-token");
/// ```
#[derive(Clone)]
pub struct Session {
    /// The Hub this session was issued by.
    pub base_url: BaseUrl,

    /// The access token for API authentication.
    pub access_token: String,

    /// The token type reported by the server.
    pub token_type: String,

    /// The granted scope, if reported.
    pub scope: Option<String>,

    /// When this session expires, if applicable.
    pub expires: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a bearer session with the specified parameters.
    #[must_use]
    pub fn new(base_url: BaseUrl, access_token: String, expires: Option<DateTime<Utc>>) -> Self {
        Self {
            base_url,
            access_token,
            token_type: DEFAULT_TOKEN_TYPE.to_string(),
            scope: None,
            expires,
        }
    }

    /// Builds a session from a token endpoint response.
    ///
    /// `expires_in` is converted to an absolute expiry relative to now. An
    /// out-of-range value is treated as no expiry.
    #[must_use]
    pub fn from_access_token_response(base_url: BaseUrl, response: &AccessTokenResponse) -> Self {
        let expires = response
            .expires_in
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));

        let scope = response.scope.as_ref().and_then(|scope| match scope {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        });

        Self {
            base_url,
            access_token: response.access_token.clone(),
            token_type: response
                .token_type
                .clone()
                .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string()),
            scope,
            expires,
        }
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this session is active (not expired and has access token).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }

    /// Returns the `Authorization` header value for this session.
    ///
    /// Bearer tokens are always sent with the `Bearer` scheme, whatever
    /// casing the server used for `token_type`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("access_token", &"*****")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("expires", &self.expires)
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseUrl {
        BaseUrl::new("https://hub.example.com").unwrap()
    }

    #[test]
    fn test_session_expired() {
        let expired = Session::new(
            base(),
            "token".to_string(),
            Some(Utc::now() - Duration::hours(1)),
        );
        assert!(expired.expired());

        let valid = Session::new(
            base(),
            "token".to_string(),
            Some(Utc::now() + Duration::hours(1)),
        );
        assert!(!valid.expired());

        let no_expiry = Session::new(base(), "token".to_string(), None);
        assert!(!no_expiry.expired());
    }

    #[test]
    fn test_session_is_active() {
        assert!(Session::new(base(), "token".to_string(), None).is_active());
        assert!(!Session::new(base(), String::new(), None).is_active());
        assert!(!Session::new(
            base(),
            "token".to_string(),
            Some(Utc::now() - Duration::hours(1))
        )
        .is_active());
    }

    #[test]
    fn test_from_response_computes_expiry() {
        let response: AccessTokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "abc",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "read write"
        }))
        .unwrap();

        let before = Utc::now();
        let session = Session::from_access_token_response(base(), &response);

        assert_eq!(session.access_token, "abc");
        assert_eq!(session.scope.as_deref(), Some("read write"));
        let expires = session.expires.unwrap();
        assert!(expires >= before + Duration::seconds(3600));
        assert!(expires <= Utc::now() + Duration::seconds(3600));
    }

    #[test]
    fn test_from_response_without_optional_fields() {
        let response: AccessTokenResponse =
            serde_json::from_value(serde_json::json!({ "access_token": "abc" })).unwrap();
        let session = Session::from_access_token_response(base(), &response);

        assert_eq!(session.token_type, "Bearer");
        assert!(session.scope.is_none());
        assert!(session.expires.is_none());
    }

    #[test]
    fn test_scope_list_is_joined() {
        let response: AccessTokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "abc",
            "scope": ["read", "write"]
        }))
        .unwrap();
        let session = Session::from_access_token_response(base(), &response);

        assert_eq!(session.scope.as_deref(), Some("read write"));
    }

    #[test]
    fn test_lowercase_token_type_still_sends_bearer() {
        let response: AccessTokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "abc",
            "token_type": "bearer"
        }))
        .unwrap();
        let session = Session::from_access_token_response(base(), &response);

        assert_eq!(session.authorization_header(), "Bearer abc");
    }

    #[test]
    fn test_debug_masks_access_token() {
        let session = Session::new(base(), "super-secret-token".to_string(), None);
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("Session"));
    }

    #[test]
    fn test_session_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
