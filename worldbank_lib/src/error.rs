//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream transport errors
/// and adding query validation and data-absence failures.
///
/// `InvalidQuery` and `NoData` are caller-facing: the first means the request
/// never reached a service, the second means a valid request found nothing.
/// `Api` failures are surfaced as generic server-side errors by consumers.
#[derive(Debug)]
pub enum WorldBankError {
    /// An error from the underlying API client.
    Api(worldbank_api::Error),
    /// JSON serialization or deserialization of a cached value failed.
    Serialization(serde_json::Error),
    /// A caller-supplied query parameter failed validation.
    InvalidQuery { field: String, message: String },
    /// The request was valid but the provider has no data for this country.
    NoData(String),
}

impl fmt::Display for WorldBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "Upstream error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidQuery { field, message } => {
                write!(f, "Invalid query parameter '{}': {}", field, message)
            }
            Self::NoData(code) => write!(f, "No data found for country '{}'", code),
        }
    }
}

impl std::error::Error for WorldBankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<worldbank_api::Error> for WorldBankError {
    fn from(e: worldbank_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for WorldBankError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
