//! Error types for crawler operations.

use thiserror::Error;

/// Result type for crawler operations.
pub type CrawlResult<T> = Result<T, CrawlError>;

/// Errors raised while fetching one year of articles.
///
/// The crawler does not retry; every variant propagates to the caller,
/// which decides whether the failure is fatal.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The network round-trip could not complete (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but does not follow the endpoint contract:
    /// bad HTTP status, unparseable body, missing or false success flag,
    /// or a malformed record list.
    #[error("protocol error: {message}")]
    Protocol { message: String },

    /// A record in the list is missing an expected field.
    #[error("schema error: {source}")]
    Schema {
        #[source]
        source: serde_json::Error,
    },
}

impl CrawlError {
    /// Creates a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}
