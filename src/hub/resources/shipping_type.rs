//! Shipping type resource and the country eligibility filter.
//!
//! A shipping type is either valid everywhere (empty `countries`) or scoped
//! by its country list. `exclude_countries` decides how that list is read:
//!
//! | `countries` | `exclude_countries` | Eligible for `country_id` when     |
//! |-------------|---------------------|------------------------------------|
//! | empty       | any                 | always                             |
//! | non-empty   | `true`              | `country_id` is **not** listed     |
//! | non-empty   | `false`             | `country_id` **is** listed         |
//!
//! # Example
//!
//! ```rust
//! use hub_api::hub::{filter_shipping_types, ShippingType};
//!
//! let types = vec![
//!     ShippingType::new(10, "UK Standard", vec![], false),
//!     ShippingType::new(11, "EU Express", vec![2], false),
//! ];
//!
//! let ids: Vec<u64> = filter_shipping_types(types, 2, Some("EU"))
//!     .iter()
//!     .map(|t| t.id)
//!     .collect();
//! assert_eq!(ids, vec![11]);
//! ```

use serde::{Deserialize, Serialize};

/// Path of the shipping type listing.
pub const SHIPPING_TYPES_PATH: &str = "/api/v1/shipping_types";

/// A named delivery service option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingType {
    /// The Hub shipping type ID.
    pub id: u64,

    /// Display name (e.g., "UK Standard").
    pub name: String,

    /// Hub country IDs this type is scoped to. Empty means every country.
    #[serde(default)]
    pub countries: Vec<u64>,

    /// When `true`, `countries` is a deny-list instead of an allow-list.
    #[serde(default)]
    pub exclude_countries: bool,

    /// Any other fields returned by the Hub, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ShippingType {
    /// Creates a shipping type with no extra fields.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        countries: Vec<u64>,
        exclude_countries: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            countries,
            exclude_countries,
            extra: serde_json::Map::new(),
        }
    }

    /// Returns `true` if this shipping type may be used for `country_id`.
    #[must_use]
    pub fn is_available_in(&self, country_id: u64) -> bool {
        if self.countries.is_empty() {
            return true;
        }
        let listed = self.countries.contains(&country_id);
        if self.exclude_countries {
            !listed
        } else {
            listed
        }
    }
}

/// Keeps the shipping types eligible for `country_id`, in their original order.
///
/// When `name_filter` is a non-empty string, only types whose name contains
/// it (case-sensitive) are kept.
#[must_use]
pub fn filter_shipping_types(
    shipping_types: Vec<ShippingType>,
    country_id: u64,
    name_filter: Option<&str>,
) -> Vec<ShippingType> {
    let name_filter = name_filter.filter(|filter| !filter.is_empty());

    shipping_types
        .into_iter()
        .filter(|shipping_type| shipping_type.is_available_in(country_id))
        .filter(|shipping_type| name_filter.map_or(true, |f| shipping_type.name.contains(f)))
        .collect()
}
