use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Errors fall into two classes. Transport errors ([`TsError::Http`], [`TsError::Status`])
/// mean the request itself failed; decode errors ([`TsError::Data`]) mean a response arrived
/// but did not have the expected shape. Neither class is fatal: calling the same operation
/// again is always allowed.
#[derive(Debug, Error)]
pub enum TsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the server was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl TsError {
    /// Returns `true` for network, timeout and HTTP status failures.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }

    /// Returns `true` when a response was received but could not be decoded.
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}
