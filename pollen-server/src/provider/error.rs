//! Provider error types.

/// Errors from fetching or decoding a provider feed.
///
/// `Fetch` and `Status` mean the provider couldn't be reached or refused
/// the request; `Decode` means it answered with a body we can't read.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network failure or timeout
    #[error("HTTP error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body is not valid JSON/XML for the expected payload
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Mock source failure (tests and offline mode)
    #[error("mock source: {0}")]
    Mock(String),
}
