//! Basket resource.
//!
//! A basket is a server-side order in progress. The client creates it with
//! `POST /api/v1/baskets` and then holds nothing but its `id`; the basket can
//! be reviewed and checked out in the Hub webstore at
//! `<base_url>/webstore/baskets/<id>/`.
//!
//! # Example
//!
//! ```rust
//! use hub_api::hub::{LineItem, NewBasket, ShippingAddress};
//!
//! let basket = NewBasket {
//!     purchase_order_number: "TESTORDER0001".to_string(),
//!     shipping_address: ShippingAddress {
//!         company_name: "Joe Bloggs Car Parts".to_string(),
//!         recipient_name: "Joe Bloggs".to_string(),
//!         addr_line_1: "2 Somewhere Street".to_string(),
//!         addr_line_2: None,
//!         city: "Somewheretown".to_string(),
//!         county: None,
//!         postal_code: "SW1A 1AA".to_string(),
//!         country_code: 1,
//!     },
//!     shipping_type: 10,
//!     provisioning_instructions: "Use ResellerCom profile".to_string(),
//!     line_items: vec![LineItem::new("2200-48820-025", 3)],
//!     name: "API Sample Order".to_string(),
//! };
//!
//! let body = serde_json::to_value(&basket).unwrap();
//! assert_eq!(body["shipping_type"], 10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::BaseUrl;
use crate::error::ConfigError;

/// Path of the basket collection.
pub const BASKETS_PATH: &str = "/api/v1/baskets";

/// Delivery address for a basket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Company receiving the goods.
    pub company_name: String,

    /// Person receiving the goods.
    pub recipient_name: String,

    /// First address line.
    pub addr_line_1: String,

    /// Second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr_line_2: Option<String>,

    /// Town or city.
    pub city: String,

    /// County or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,

    /// Postal code.
    pub postal_code: String,

    /// The Hub country ID (not the ISO code).
    pub country_code: u64,
}

/// One product line in a basket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// The product code (SKU).
    pub product_code: String,

    /// Number of units.
    pub quantity: u32,

    /// Provisioning product code, for items that need provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prov_product_code: Option<String>,
}

impl LineItem {
    /// Creates a line item without a provisioning product code.
    #[must_use]
    pub fn new(product_code: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_code: product_code.into(),
            quantity,
            prov_product_code: None,
        }
    }

    /// Sets the provisioning product code.
    #[must_use]
    pub fn with_prov_product_code(mut self, code: impl Into<String>) -> Self {
        self.prov_product_code = Some(code.into());
        self
    }
}

/// Request body for creating a basket.
///
/// Serializes to exactly six keys: `purchase_order_number`,
/// `shipping_address`, `shipping_type`, `provisioning_instructions`,
/// `line_items` and `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBasket {
    /// The reseller's purchase order number.
    pub purchase_order_number: String,

    /// The customer's delivery address.
    pub shipping_address: ShippingAddress,

    /// ID of the chosen shipping type.
    pub shipping_type: u64,

    /// Instructions accompanying the provisioning SKU.
    pub provisioning_instructions: String,

    /// Items to order.
    pub line_items: Vec<LineItem>,

    /// Display name of the basket.
    pub name: String,
}

/// Identifier of a created basket.
///
/// The Hub reports basket IDs as integers, but a string ID is accepted
/// unchanged so that a basket created on the server is never lost to a
/// decode failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum BasketId {
    /// A numeric ID.
    Number(u64),
    /// Any other ID, kept as returned.
    Text(String),
}

impl fmt::Display for BasketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for BasketId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for BasketId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// A basket as returned by the Hub.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Basket {
    /// The Hub basket ID.
    pub id: BasketId,

    /// Display name, if returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Any other fields returned by the Hub, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Basket {
    /// Returns the webstore page for this basket.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPath`] if the URL cannot be built.
    pub fn web_url(&self, base_url: &BaseUrl) -> Result<Url, ConfigError> {
        base_url.join(&format!("/webstore/baskets/{}/", self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_address() -> ShippingAddress {
        ShippingAddress {
            company_name: "Joe Bloggs Car Parts".to_string(),
            recipient_name: "Joe Bloggs".to_string(),
            addr_line_1: "2 Somewhere Street".to_string(),
            addr_line_2: None,
            city: "Somewheretown".to_string(),
            county: None,
            postal_code: "SW1A 1AA".to_string(),
            country_code: 1,
        }
    }

    #[test]
    fn test_new_basket_serializes_exactly_six_keys() {
        let basket = NewBasket {
            purchase_order_number: "PO-1".to_string(),
            shipping_address: sample_address(),
            shipping_type: 10,
            provisioning_instructions: "none".to_string(),
            line_items: vec![LineItem::new("SKU-1", 2)],
            name: "Order".to_string(),
        };

        let value = serde_json::to_value(&basket).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "line_items",
                "name",
                "provisioning_instructions",
                "purchase_order_number",
                "shipping_address",
                "shipping_type",
            ]
        );
        assert_eq!(value["purchase_order_number"], json!("PO-1"));
        assert_eq!(value["shipping_type"], json!(10));
    }

    #[test]
    fn test_optional_address_lines_are_omitted() {
        let value = serde_json::to_value(sample_address()).unwrap();

        assert!(value.get("addr_line_2").is_none());
        assert!(value.get("county").is_none());
        assert_eq!(value["country_code"], json!(1));
    }

    #[test]
    fn test_line_item_with_prov_product_code() {
        let item = LineItem::new("2200-48820-025", 3).with_prov_product_code("UD-SIP-SER-PRV-PH");

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "product_code": "2200-48820-025",
                "quantity": 3,
                "prov_product_code": "UD-SIP-SER-PRV-PH"
            })
        );
    }

    #[test]
    fn test_basket_web_url() {
        let basket: Basket = serde_json::from_value(json!({"id": 42, "status": "open"})).unwrap();
        let base = BaseUrl::new("https://hub.example.com/").unwrap();

        assert_eq!(basket.id, BasketId::Number(42));
        assert_eq!(
            basket.web_url(&base).unwrap().as_str(),
            "https://hub.example.com/webstore/baskets/42/"
        );
        assert_eq!(basket.extra.get("status"), Some(&json!("open")));
    }

    #[test]
    fn test_basket_with_string_id() {
        let basket: Basket = serde_json::from_value(json!({"id": "b-4521"})).unwrap();
        let base = BaseUrl::new("https://hub.example.com/").unwrap();

        assert_eq!(basket.id, BasketId::from("b-4521"));
        assert_eq!(basket.id.to_string(), "b-4521");
        assert_eq!(
            basket.web_url(&base).unwrap().as_str(),
            "https://hub.example.com/webstore/baskets/b-4521/"
        );
    }

    #[test]
    fn test_basket_id_serializes_as_returned() {
        assert_eq!(serde_json::to_value(BasketId::from(7)).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(BasketId::from("x")).unwrap(), json!("x"));
    }
}
