//! Error types for the World Bank API client.

/// Errors that can occur when fetching from the World Bank API.
///
/// An empty or malformed records payload is not an error; the client
/// normalizes those to an empty record set so callers can tell "provider
/// has nothing" apart from a failed fetch.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a usable response: network failure,
    /// timeout, or a body that could not be read or parsed.
    #[error("World Bank request failed")]
    RequestFailed,
    /// The provider returned a non-success status, with a body snippet.
    #[error("World Bank request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
