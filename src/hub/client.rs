//! Hub resource client.
//!
//! This module provides the [`HubClient`] type wrapping an authenticated
//! [`HttpClient`] with the named Hub operations.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::oauth::{exchange_client_credentials, OAuthError};
use crate::auth::Session;
use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::{BaseUrl, HubConfig};
use crate::hub::resources::{
    filter_shipping_types, find_country_id, Basket, Country, LineItem, NewBasket,
    ShippingAddress, ShippingType, UserProfile, BASKETS_PATH, COUNTRY_CODES_PATH,
    SHIPPING_TYPES_PATH, WHOAMI_PATH,
};
use crate::hub::HubError;

/// Client for the Hub REST API.
///
/// Each operation is a single request/response round trip. The session is
/// read-only after construction.
///
/// # Thread Safety
///
/// `HubClient` is `Send + Sync`; independent calls may run concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use hub_api::{HubClient, HubConfig};
///
/// let config = HubConfig::from_env()?;
/// let client = HubClient::connect(&config).await?;
///
/// let me = client.whoami().await?;
/// println!("Authenticated as {}", me.name.unwrap_or_default());
///
/// if let Some(gb) = client.get_country_id_by_iso_code("GB").await? {
///     let types = client
///         .get_shipping_types_for_country(gb, Some("UK Standard"))
///         .await?;
///     println!("{} shipping types available", types.len());
/// }
/// ```
#[derive(Debug)]
pub struct HubClient {
    /// The authenticated sender.
    http_client: HttpClient,
    /// The session the sender was built from.
    session: Session,
}

// Verify HubClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HubClient>();
};

impl HubClient {
    /// Authenticates with the configured credentials and returns a client.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Authentication`] if the Hub rejects the credentials
    /// or issues no token, or [`HubError::Transport`] if the Hub cannot be
    /// reached or the HTTP client cannot be created.
    pub async fn connect(config: &HubConfig) -> Result<Self, HubError> {
        let session = exchange_client_credentials(config).await?;
        Self::new(session, Some(config))
    }

    /// Creates a client from an existing session.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Transport`] if the HTTP client cannot be created.
    pub fn new(session: Session, config: Option<&HubConfig>) -> Result<Self, HubError> {
        let http_client = HttpClient::new(&session, config)?;
        Ok(Self {
            http_client,
            session,
        })
    }

    /// Returns the session this client authenticates with.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the Hub base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.session.base_url
    }

    /// Returns the profile of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`HubError`] if the request or decoding fails.
    pub async fn whoami(&self) -> Result<UserProfile, HubError> {
        self.get(WHOAMI_PATH).await
    }

    /// Returns every country known to the Hub, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`HubError`] if the request or decoding fails.
    pub async fn countries(&self) -> Result<Vec<Country>, HubError> {
        self.get(COUNTRY_CODES_PATH).await
    }

    /// Resolves an ISO 3166-1 alpha-2 code (e.g., `"GB"`) to a Hub country ID.
    ///
    /// Returns `Ok(None)` when the Hub has no country with that exact,
    /// case-sensitive code.
    ///
    /// # Errors
    ///
    /// Returns [`HubError`] if the request or decoding fails.
    pub async fn get_country_id_by_iso_code(&self, iso_code: &str) -> Result<Option<u64>, HubError> {
        let countries = self.countries().await?;
        let country_id = find_country_id(&countries, iso_code);
        if country_id.is_none() {
            tracing::debug!(iso_code, "No Hub country matches ISO code");
        }
        Ok(country_id)
    }

    /// Returns every shipping type, in server order, without filtering.
    ///
    /// # Errors
    ///
    /// Returns [`HubError`] if the request or decoding fails.
    pub async fn shipping_types(&self) -> Result<Vec<ShippingType>, HubError> {
        self.get(SHIPPING_TYPES_PATH).await
    }

    /// Returns the shipping types valid for `country_id`.
    ///
    /// When `name_filter` is given, only types whose name contains it are
    /// returned. The list may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`HubError`] if the request or decoding fails.
    pub async fn get_shipping_types_for_country(
        &self,
        country_id: u64,
        name_filter: Option<&str>,
    ) -> Result<Vec<ShippingType>, HubError> {
        let shipping_types = self.shipping_types().await?;
        Ok(filter_shipping_types(shipping_types, country_id, name_filter))
    }

    /// Creates a new basket.
    ///
    /// # Arguments
    ///
    /// * `purchase_order_number` - The reseller's PO number
    /// * `shipping_address` - The customer's delivery address
    /// * `shipping_type` - ID of the desired shipping service
    /// * `provisioning_instructions` - Instructions for the provisioning SKU
    /// * `line_items` - Items to be ordered
    /// * `name` - A display name for the basket
    ///
    /// # Errors
    ///
    /// Returns [`HubError`] if the request or decoding fails.
    pub async fn create_basket(
        &self,
        purchase_order_number: impl Into<String>,
        shipping_address: ShippingAddress,
        shipping_type: u64,
        provisioning_instructions: impl Into<String>,
        line_items: Vec<LineItem>,
        name: impl Into<String>,
    ) -> Result<Basket, HubError> {
        let basket = NewBasket {
            purchase_order_number: purchase_order_number.into(),
            shipping_address,
            shipping_type,
            provisioning_instructions: provisioning_instructions.into(),
            line_items,
            name: name.into(),
        };
        self.submit_basket(&basket).await
    }

    /// Creates a basket from a prepared request body.
    ///
    /// # Errors
    ///
    /// Returns [`HubError`] if the request or decoding fails.
    pub async fn submit_basket(&self, basket: &NewBasket) -> Result<Basket, HubError> {
        let created: Basket = self.post(BASKETS_PATH, basket).await?;
        tracing::info!(basket_id = %created.id, "Created Hub basket");
        Ok(created)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HubError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .build()
            .map_err(|e| HubError::Transport(e.into()))?;
        self.send(request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HubError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|source| HubError::Encode {
            path: path.to_string(),
            source,
        })?;
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build()
            .map_err(|e| HubError::Transport(e.into()))?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, HubError> {
        if self.session.expired() {
            return Err(OAuthError::TokenExpired.into());
        }

        let path = request.path.clone();
        let response = self.http_client.request(request).await?;

        serde_json::from_value(response.body)
            .map_err(|source| HubError::Decode { path, source })
    }
}
