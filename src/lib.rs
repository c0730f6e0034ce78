//! # Hub API Rust Client
//!
//! A Rust client for the Hub e-commerce REST API, providing type-safe
//! configuration, client-credentials authentication, and typed access to
//! the Hub ordering endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HubConfig`] and [`HubConfigBuilder`]
//! - Validated newtypes for API credentials and the Hub base URL
//! - OAuth 2.0 client credentials exchange via [`auth::oauth`]
//! - Session management for authenticated API calls
//! - An async HTTP client with bearer authentication
//! - Country lookup, shipping type eligibility, and basket creation via [`HubClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use hub_api::{HubConfig, ClientId, ClientSecret, BaseUrl};
//!
//! let config = HubConfig::builder()
//!     .base_url(BaseUrl::new("https://hub.example.com").unwrap())
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Authenticating
//!
//! ```rust,ignore
//! use hub_api::{HubClient, HubConfig, HubError};
//!
//! let config = HubConfig::from_env()?;
//!
//! let client = match HubClient::connect(&config).await {
//!     Ok(client) => client,
//!     Err(HubError::Authentication(e)) => {
//!         eprintln!("ERROR: Invalid Hub API credentials.");
//!         return Err(e.into());
//!     }
//!     Err(e) => return Err(e.into()),
//! };
//!
//! let me = client.whoami().await?;
//! ```
//!
//! ## Placing an Order
//!
//! ```rust,ignore
//! use hub_api::hub::{LineItem, ShippingAddress};
//!
//! let country = client
//!     .get_country_id_by_iso_code("GB")
//!     .await?
//!     .ok_or("unknown country")?;
//!
//! let shipping = client
//!     .get_shipping_types_for_country(country, Some("UK Standard"))
//!     .await?;
//!
//! let basket = client
//!     .create_basket(
//!         "TESTORDER0001",
//!         address,
//!         shipping[0].id,
//!         "Use ResellerCom profile",
//!         vec![LineItem::new("2200-48820-025", 3)],
//!         "API Sample Order",
//!     )
//!     .await?;
//!
//! println!("{}", basket.web_url(client.base_url())?);
//! ```
//!
//! ## Sessions
//!
//! ```rust
//! use hub_api::{BaseUrl, Session};
//!
//! let session = Session::new(
//!     BaseUrl::new("https://hub.example.com").unwrap(),
//!     "access-token".to_string(),
//!     None,
//! );
//!
//! assert!(session.is_active());
//! assert_eq!(session.authorization_header(), "Bearer access-token");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable sessions**: Sessions are immutable after creation

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod hub;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{BaseUrl, ClientId, ClientSecret, HubConfig, HubConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{exchange_client_credentials, OAuthError};

// Re-export Hub operations
pub use hub::{HubClient, HubError};
