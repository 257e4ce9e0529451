//! Country types returned by the catalog endpoint.

use serde::{Deserialize, Serialize};

/// Unique three-letter identifier for a country (e.g. "DEU").
pub type CountryID = String;

/// Classification pair the provider uses for regions, income levels, and
/// lending types. The human-readable name is carried in `value`.
#[derive(Serialize, Deserialize, Clone)]
pub struct Classification {
    pub id: String,
    pub iso2code: String,
    pub value: String,
}

/// Raw country record as returned by the `/country` endpoint.
///
/// Aggregate rows (regions, income groups) share this shape; they are
/// recognizable by their `region.value` of "Aggregates" and are filtered
/// out before reaching callers.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WbCountry {
    /// Unique country identifier (e.g. "DEU").
    pub id: CountryID,

    /// Two-letter ISO code. Empty on some pseudo-entries.
    pub iso2_code: String,

    /// Country display name.
    pub name: String,

    /// Geographic region classification.
    pub region: Classification,

    /// Income level classification.
    pub income_level: Classification,

    /// Capital city name. Empty on some pseudo-entries.
    pub capital_city: String,
}

/// Normalized country record exposed by the catalog.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Unique country identifier (e.g. "DEU").
    pub id: CountryID,

    /// Two-letter ISO code (e.g. "DE").
    pub iso2_code: String,

    /// Country display name.
    pub name: String,

    /// Region name (e.g. "Europe & Central Asia").
    pub region: String,

    /// Income level name (e.g. "High income").
    pub income_level: String,
}

impl From<WbCountry> for Country {
    fn from(val: WbCountry) -> Self {
        Country {
            id: val.id,
            iso2_code: val.iso2_code,
            name: val.name,
            region: val.region.value,
            income_level: val.income_level.value,
        }
    }
}
