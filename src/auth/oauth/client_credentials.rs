//! OAuth 2.0 Client Credentials Grant against the Hub token endpoint.
//!
//! The Hub issues API tokens to registered API clients through the
//! client-credentials grant. There is no user interaction: the client ID and
//! secret are posted to the token endpoint and a bearer token comes back.
//!
//! # Request
//!
//! `POST <base_url>/api/v1/oauth/create_token` with an
//! `application/x-www-form-urlencoded` body:
//!
//! ```text
//! grant_type=client_credentials&client_id=...&client_secret=...
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use hub_api::{HubConfig, ClientId, ClientSecret};
//! use hub_api::auth::oauth::exchange_client_credentials;
//!
//! let config = HubConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let session = exchange_client_credentials(&config).await?;
//! println!("Token expires at {:?}", session.expires);
//! ```

use crate::auth::oauth::OAuthError;
use crate::auth::session::AccessTokenResponse;
use crate::auth::Session;
use crate::config::HubConfig;
use serde::Serialize;

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Path of the token endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "/api/v1/oauth/create_token";

/// Form body for the client credentials exchange.
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Exchanges client credentials for an access token.
///
/// # Returns
///
/// A [`Session`] bound to the configured base URL, carrying the bearer token
/// and its expiry.
///
/// # Errors
///
/// - [`OAuthError::ClientCredentialsFailed`] if the Hub rejects the
///   credentials (non-2xx status)
/// - [`OAuthError::MissingToken`] if the response carries no access token
/// - [`OAuthError::Network`] if the token endpoint cannot be reached
pub async fn exchange_client_credentials(config: &HubConfig) -> Result<Session, OAuthError> {
    let token_url = config.base_url().join(TOKEN_PATH)?;

    let request_body = ClientCredentialsRequest {
        grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
    };

    let client = reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(config.request_timeout())
        .build()?;

    tracing::debug!(url = %token_url, "Requesting Hub access token");

    let response = client
        .post(token_url)
        .header("Accept", "application/json")
        .form(&request_body)
        .send()
        .await?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        tracing::warn!(status, "Hub rejected the client credentials");
        return Err(OAuthError::ClientCredentialsFailed {
            status,
            message: error_body,
        });
    }

    let token_response: AccessTokenResponse = response.json().await.map_err(|e| {
        tracing::warn!(status, error = %e, "Token response could not be decoded");
        OAuthError::MissingToken
    })?;

    if token_response.access_token.is_empty() {
        return Err(OAuthError::MissingToken);
    }

    let session = Session::from_access_token_response(config.base_url().clone(), &token_response);

    tracing::info!(
        expires = ?session.expires,
        scope = ?session.scope,
        "Obtained Hub access token"
    );

    Ok(session)
}
