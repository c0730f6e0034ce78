//! Configuration types for the Hub API client.
//!
//! This module provides the settings needed to authenticate against the Hub
//! and issue API calls.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HubConfig`]: The immutable settings record
//! - [`HubConfigBuilder`]: A builder for constructing [`HubConfig`] instances
//! - [`ClientId`]: A validated client ID newtype
//! - [`ClientSecret`]: A validated client secret newtype with masked debug output
//! - [`BaseUrl`]: A validated Hub base URL
//!
//! # Environment
//!
//! [`HubConfig::from_env`] reads the following variables:
//!
//! | Variable               | Required | Default                               |
//! |------------------------|----------|---------------------------------------|
//! | `BASE_URL`             | no       | `https://hub.staging.nuvias-uc.com/`  |
//! | `CLIENT_ID`            | yes      |                                       |
//! | `CLIENT_SECRET`        | yes      |                                       |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                                  |
//!
//! # Example
//!
//! ```rust
//! use hub_api::{HubConfig, ClientId, ClientSecret, BaseUrl};
//!
//! let config = HubConfig::builder()
//!     .base_url(BaseUrl::new("https://hub.example.com").unwrap())
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://hub.example.com/");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ClientId, ClientSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://hub.staging.nuvias-uc.com/";

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the base URL.
pub const BASE_URL_ENV: &str = "BASE_URL";
/// Environment variable holding the client ID.
pub const CLIENT_ID_ENV: &str = "CLIENT_ID";
/// Environment variable holding the client secret.
pub const CLIENT_SECRET_ENV: &str = "CLIENT_SECRET";
/// Environment variable holding the request timeout in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "REQUEST_TIMEOUT_SECS";

/// Settings for talking to the Hub API.
///
/// Immutable once built. Holds the base URL and the client credentials used
/// for the client-credentials token exchange.
///
/// # Thread Safety
///
/// `HubConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct HubConfig {
    base_url: BaseUrl,
    client_id: ClientId,
    client_secret: ClientSecret,
    request_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl HubConfig {
    /// Creates a new builder for constructing a `HubConfig`.
    #[must_use]
    pub fn builder() -> HubConfigBuilder {
        HubConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// See the [module documentation](self) for the variables read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `CLIENT_ID` or
    /// `CLIENT_SECRET` is unset, or any validation error for the values found.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// This is what [`HubConfig::from_env`] uses under the hood; it allows
    /// loading settings from any key/value source.
    ///
    /// # Errors
    ///
    /// Same as [`HubConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            builder = builder.base_url(BaseUrl::new(base_url)?);
        }

        let client_id = lookup(CLIENT_ID_ENV).ok_or(ConfigError::MissingEnvVar {
            name: CLIENT_ID_ENV,
        })?;
        let client_secret = lookup(CLIENT_SECRET_ENV).ok_or(ConfigError::MissingEnvVar {
            name: CLIENT_SECRET_ENV,
        })?;
        builder = builder
            .client_id(ClientId::new(client_id)?)
            .client_secret(ClientSecret::new(client_secret)?);

        if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout { value: raw })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the timeout applied to every HTTP request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify HubConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HubConfig>();
};

/// Builder for constructing [`HubConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `request_timeout`: [`DEFAULT_REQUEST_TIMEOUT`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct HubConfigBuilder {
    base_url: Option<BaseUrl>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    request_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl HubConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Hub base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the timeout applied to every HTTP request.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`HubConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<HubConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let base_url = match self.base_url {
            Some(base_url) => base_url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(HubConfig {
            base_url,
            client_id,
            client_secret,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
