//! OAuth-specific error types for the Hub API client.
//!
//! [`OAuthError::ClientCredentialsFailed`], [`OAuthError::MissingToken`] and
//! [`OAuthError::TokenExpired`] are authentication failures: none of them
//! are retryable without fixing the credentials or obtaining a fresh session.
//! [`OAuthError::Network`] means the Hub was never reached.
//!
//! # Example
//!
//! ```rust
//! use hub_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::MissingToken;
//! assert!(error.to_string().contains("no access token"));
//! ```

use crate::error::ConfigError;
use thiserror::Error;

/// Errors that can occur while authenticating against the Hub.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token endpoint rejected the client credentials.
    #[error("Client credentials exchange failed with status {status}: {message}")]
    ClientCredentialsFailed {
        /// The HTTP status code returned by the token endpoint.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// The token endpoint answered successfully but issued no token.
    #[error("Authentication failed: the token endpoint returned no access token")]
    MissingToken,

    /// The session's access token has expired.
    #[error("The access token has expired; authenticate again to obtain a new session")]
    TokenExpired,

    /// The token endpoint URL could not be built from the base URL.
    #[error("Invalid token endpoint: {0}")]
    InvalidTokenUrl(#[from] ConfigError),

    /// The token endpoint could not be reached (connection, DNS or timeout).
    #[error("Could not reach the token endpoint: {0}")]
    Network(#[from] reqwest::Error),
}

impl OAuthError {
    /// Returns `true` if the Hub refused to issue a usable token.
    ///
    /// Network and URL failures say nothing about the credentials and return
    /// `false`.
    #[must_use]
    pub const fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            Self::ClientCredentialsFailed { .. } | Self::MissingToken | Self::TokenExpired
        )
    }
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
