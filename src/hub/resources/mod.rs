//! Typed models for the Hub resources used by [`HubClient`](crate::hub::HubClient).
//!
//! Each model keeps the fields the client relies on typed and collects the
//! rest of the server's payload in an `extra` map, so nothing the Hub returns
//! is lost.

mod basket;
mod country;
mod shipping_type;
mod user_profile;

pub use basket::{Basket, BasketId, LineItem, NewBasket, ShippingAddress, BASKETS_PATH};
pub use country::{find_country_id, Country, COUNTRY_CODES_PATH};
pub use shipping_type::{filter_shipping_types, ShippingType, SHIPPING_TYPES_PATH};
pub use user_profile::{UserProfile, WHOAMI_PATH};
