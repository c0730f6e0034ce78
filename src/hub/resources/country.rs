//! Country code resource.
//!
//! The Hub identifies countries by its own integer IDs. Endpoints that take a
//! country (shipping types, shipping addresses) expect that ID, so ISO codes
//! have to be translated first via `GET /api/v1/country_codes`.
//!
//! # Example
//!
//! ```rust
//! use hub_api::hub::{find_country_id, Country};
//!
//! let countries = vec![Country::new(1, "GB"), Country::new(2, "US")];
//!
//! assert_eq!(find_country_id(&countries, "US"), Some(2));
//! assert_eq!(find_country_id(&countries, "FR"), None);
//! ```

use serde::{Deserialize, Serialize};

/// Path of the country code listing.
pub const COUNTRY_CODES_PATH: &str = "/api/v1/country_codes";

/// A country known to the Hub.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    /// The Hub country ID.
    pub id: u64,

    /// The two-letter ISO 3166-1 alpha-2 code (e.g., "GB").
    pub iso_code: String,

    /// Any other fields returned by the Hub, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Country {
    /// Creates a country with no extra fields.
    #[must_use]
    pub fn new(id: u64, iso_code: impl Into<String>) -> Self {
        Self {
            id,
            iso_code: iso_code.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Returns the ID of the first country whose ISO code equals `iso_code`.
///
/// The comparison is exact and case-sensitive. Returns `None` when no entry
/// matches.
#[must_use]
pub fn find_country_id(countries: &[Country], iso_code: &str) -> Option<u64> {
    countries
        .iter()
        .find(|country| country.iso_code == iso_code)
        .map(|country| country.id)
}
