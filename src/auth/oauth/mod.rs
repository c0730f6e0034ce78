//! OAuth 2.0 client-credentials authentication for the Hub API.
//!
//! The Hub authenticates API clients with the client-credentials grant:
//!
//! - [`exchange_client_credentials`]: Obtain a bearer [`Session`](crate::Session)
//!   using the configured client ID and secret
//!
//! A rejected exchange is fatal: retrying with the same credentials will not
//! succeed. [`OAuthError::Network`] is the exception, since the Hub was
//! never reached.
//!
//! # Token Expiry
//!
//! Sessions record the expiry reported by the token endpoint. Clients check
//! it before every request and fail with [`OAuthError::TokenExpired`] rather
//! than send a request the Hub would reject. Tokens are not refreshed
//! automatically; run the exchange again to obtain a new session.
//!
//! # Example
//!
//! ```rust,ignore
//! use hub_api::HubConfig;
//! use hub_api::auth::oauth::{exchange_client_credentials, OAuthError};
//!
//! let config = HubConfig::from_env()?;
//!
//! match exchange_client_credentials(&config).await {
//!     Ok(session) => println!("Authenticated against {}", session.base_url),
//!     Err(OAuthError::ClientCredentialsFailed { status, .. }) => {
//!         eprintln!("Credentials rejected ({status})");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod client_credentials;
mod error;

pub use client_credentials::{exchange_client_credentials, TOKEN_PATH};
pub use error::OAuthError;
