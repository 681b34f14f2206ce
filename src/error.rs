//! Error types for the J-Quants API client.
//!
//! Every fallible operation in this crate returns [`Result`]. Nothing is
//! retried internally: an error aborts the operation that produced it and
//! the caller decides whether to run the whole operation again.

use thiserror::Error;

/// A specialized `Result` type for J-Quants operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all J-Quants API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed while fetching a data page
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local I/O failed (token file, log directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Refresh token issuance or ID token exchange failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A data request returned a non-200 status
    #[error("Request failed: status={status}, body={body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Raw response body for debugging
        body: String,
    },

    /// A response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Pagination did not terminate within the configured page limit
    #[error("Pagination exceeded {limit} pages")]
    PageLimitExceeded {
        /// The configured maximum number of pages
        limit: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if running the failed operation again might succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    ///
    /// # Example
    ///
    /// ```
    /// use jquants_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying the whole fetch...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::RequestFailed { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) => true,
            Error::RequestFailed { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::RequestFailed { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::RequestFailed { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn decode(context: &str, err: impl std::fmt::Display) -> Self {
        Error::Decode(format!("{}: {}", context, err))
    }
}
