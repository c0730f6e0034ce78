//! Hub resource operations.
//!
//! This module provides the [`HubClient`] with the named operations of the
//! Hub REST API, and the typed models they return.
//!
//! # Operations
//!
//! | Method                                         | Endpoint                     |
//! |------------------------------------------------|------------------------------|
//! | [`HubClient::whoami`]                          | `GET /api/v1/whoami`         |
//! | [`HubClient::get_country_id_by_iso_code`]      | `GET /api/v1/country_codes`  |
//! | [`HubClient::get_shipping_types_for_country`]  | `GET /api/v1/shipping_types` |
//! | [`HubClient::create_basket`]                   | `POST /api/v1/baskets`       |
//!
//! # Missing Data
//!
//! Lookups that find nothing are not errors: an unknown ISO code yields
//! `None`, and a country with no eligible shipping types yields an empty
//! list. Callers decide whether that is fatal.

mod client;
mod errors;
pub mod resources;

pub use client::HubClient;
pub use errors::HubError;
pub use resources::{
    filter_shipping_types, find_country_id, Basket, BasketId, Country, LineItem, NewBasket,
    ShippingAddress, ShippingType, UserProfile,
};
