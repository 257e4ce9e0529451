//! Indicator series types returned by the data endpoints.

use serde::{Deserialize, Serialize};

/// Reference to the indicator an observation belongs to.
#[derive(Serialize, Deserialize, Clone)]
pub struct IndicatorRef {
    pub id: String,
    pub value: String,
}

/// Country reference embedded on every observation.
#[derive(Serialize, Deserialize, Clone)]
pub struct CountryRef {
    /// Two-letter country identifier used on observations (e.g. "DE").
    pub id: String,

    /// Human-readable country name. The provider serializes this as `value`.
    #[serde(rename = "value")]
    pub name: String,
}

/// Raw observation as returned by the indicator endpoint.
#[derive(Serialize, Deserialize)]
pub struct WbSeriesPoint {
    /// The indicator this observation belongs to.
    pub indicator: IndicatorRef,

    /// The country this observation belongs to.
    pub country: CountryRef,

    /// Three-letter country code (e.g. "DEU").
    pub countryiso3code: String,

    /// Observation year as a four-digit string.
    pub date: String,

    /// Observed value. `null` when the provider has no observation.
    pub value: Option<f64>,

    /// Unit of measure. Usually empty.
    pub unit: String,

    /// Observation status flag. Usually empty.
    pub obs_status: String,

    /// Number of decimal places the provider reports for this indicator.
    pub decimal: i64,
}

/// Normalized observation: one value of one indicator for one country-year.
#[derive(Serialize, Deserialize, Clone)]
pub struct SeriesPoint {
    /// The country this observation belongs to.
    pub country: CountryRef,

    /// Observation year as a four-digit string.
    pub date: String,

    /// Observed value. `None` when the provider has no observation for the
    /// year, which is distinct from an observed zero.
    pub value: Option<f64>,
}

impl From<WbSeriesPoint> for SeriesPoint {
    fn from(val: WbSeriesPoint) -> Self {
        SeriesPoint {
            country: val.country,
            date: val.date,
            value: val.value,
        }
    }
}
