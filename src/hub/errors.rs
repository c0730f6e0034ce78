//! Error types for Hub resource operations.
//!
//! - [`HubError::Authentication`]: The Hub refused the credentials or the session expired
//! - [`HubError::Transport`]: Network failure (including an unreachable token
//!   endpoint) or non-2xx response
//! - [`HubError::Decode`]: The response was not the expected JSON
//!
//! A country or shipping type that cannot be found is not an error; the
//! lookup operations return an empty `Option` or `Vec` instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use hub_api::hub::{HubClient, HubError};
//!
//! match HubClient::connect(&config).await {
//!     Ok(client) => { /* ... */ }
//!     Err(HubError::Authentication(e)) => {
//!         eprintln!("ERROR: Invalid Hub API credentials. ({e})");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use crate::auth::oauth::OAuthError;
use crate::clients::HttpError;
use thiserror::Error;

/// Error type for Hub resource operations.
#[derive(Debug, Error)]
pub enum HubError {
    /// Authentication failed or the session is no longer valid.
    #[error(transparent)]
    Authentication(OAuthError),

    /// The HTTP call failed.
    #[error(transparent)]
    Transport(HttpError),

    /// A request body could not be encoded as JSON.
    #[error("Failed to encode request body for {path}: {source}")]
    Encode {
        /// The path the body was meant for.
        path: String,
        /// The underlying encode error.
        #[source]
        source: serde_json::Error,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        /// The path or URL that was requested.
        path: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<OAuthError> for HubError {
    fn from(error: OAuthError) -> Self {
        match error {
            OAuthError::Network(e) => Self::Transport(HttpError::Network(e)),
            other => Self::Authentication(other),
        }
    }
}

impl From<HttpError> for HubError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Decode { url, source } => Self::Decode { path: url, source },
            other => Self::Transport(other),
        }
    }
}
