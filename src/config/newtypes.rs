//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;
use url::Url;

/// A validated Hub API client ID.
///
/// This newtype ensures the client ID is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use hub_api::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Hub API client secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use hub_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated Hub base URL.
///
/// The URL must use the `http` or `https` scheme and carry a host. Paths are
/// resolved against it with [`BaseUrl::join`], which follows standard URL
/// reference resolution: an absolute path such as `/api/v1/whoami` replaces
/// any path component of the base.
///
/// # Example
///
/// ```rust
/// use hub_api::BaseUrl;
///
/// let base = BaseUrl::new("https://hub.staging.nuvias-uc.com").unwrap();
/// assert_eq!(base.as_ref(), "https://hub.staging.nuvias-uc.com/");
///
/// let url = base.join("/api/v1/whoami").unwrap();
/// assert_eq!(url.as_str(), "https://hub.staging.nuvias-uc.com/api/v1/whoami");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// has a scheme other than `http`/`https`, or has no host.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
        };

        let parsed = Url::parse(raw).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Resolves `path` against this base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPath`] if the path is empty or cannot be
    /// resolved.
    pub fn join(&self, path: &str) -> Result<Url, ConfigError> {
        if path.is_empty() {
            return Err(ConfigError::InvalidPath {
                path: String::new(),
            });
        }
        self.0.join(path).map_err(|_| ConfigError::InvalidPath {
            path: path.to_string(),
        })
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

// Verify newtypes are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientId>();
    assert_send_sync::<ClientSecret>();
    assert_send_sync::<BaseUrl>();
};
