//! Library layer for the World Bank data facade: cached client, catalog and
//! series aggregation services, and query validation.
//!
//! Wraps the `worldbank_api` crate with an in-memory TTL cache, a
//! read-through catalog listing with search and pagination, and the
//! concurrent dual-indicator merge behind the country detail view.

pub mod cache;
pub mod catalog;
pub mod client;
pub mod error;
pub mod series;
pub mod validation;

pub use worldbank_api;
pub use worldbank_api::types;

pub use cache::MemoryCache;
pub use catalog::{list_countries, CountryPage};
pub use client::CachedClient;
pub use error::WorldBankError;
pub use series::{merged_series, MergedSeries, MergedYearRecord};
pub use validation::{CatalogQuery, IndicatorQuery};
