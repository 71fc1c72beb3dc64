//! Error types for the dockdockgo-search crate.
//!
//! Each variant carries a stable code (SCREAMING_SNAKE_CASE) accessible via
//! [`SearchError::code()`]. [`SearchError::message()`] returns the text that
//! is shown to users verbatim; transport and parse details stay in the
//! `Display` output for logs.

/// Message shown when the search service cannot be reached.
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred";

/// Message shown when the search service returns a body that cannot be decoded.
pub const PARSE_ERROR_MESSAGE: &str = "An error occurred while searching";

/// Stable error codes for programmatic error handling.
pub mod error_codes {
    /// The query failed local validation and was never sent.
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";

    /// The search service answered with a non-success status.
    pub const HTTP_ERROR: &str = "HTTP_ERROR";

    /// The request could not be delivered (DNS, connect, TLS, reset).
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";

    /// A response body could not be decoded.
    pub const PARSE_ERROR: &str = "PARSE_ERROR";

    /// Invalid client configuration.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
}

/// Errors that can occur while querying the search service.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query was rejected before reaching the network.
    #[error("validation error: {0}")]
    Validation(String),

    /// The service responded with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Machine-readable error code from the response body, if any.
        code: Option<String>,
        /// Human-readable message, from the body or a status fallback.
        message: String,
    },

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The success body did not match the response schema.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => error_codes::VALIDATION_FAILED,
            Self::Http { .. } => error_codes::HTTP_ERROR,
            Self::Network(_) => error_codes::NETWORK_ERROR,
            Self::Parse(_) => error_codes::PARSE_ERROR,
            Self::Config(_) => error_codes::CONFIG_INVALID,
        }
    }

    /// Returns the user-facing message.
    ///
    /// Network and parse failures collapse to fixed messages; the underlying
    /// detail is only available through `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Config(m) => m,
            Self::Http { message, .. } => message,
            Self::Network(_) => NETWORK_ERROR_MESSAGE,
            Self::Parse(_) => PARSE_ERROR_MESSAGE,
        }
    }

    /// Returns the HTTP status if the service produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for dockdockgo-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
