//! Error types for article-to-event conversion.

use thiserror::Error;

/// Errors that can occur while converting a raw article into an event.
///
/// Both variants indicate a violated data contract on the upstream record
/// and propagate to the caller rather than being swallowed.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A date field does not match the `YYYY-MM-DD` contract.
    #[error("invalid date in field {field}: {value:?}")]
    DateFormat {
        /// The upstream key that held the value.
        field: &'static str,
        /// The offending raw value.
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// An epoch-millisecond timestamp is outside the representable range.
    #[error("timestamp in field {field} out of range: {millis}")]
    Timestamp {
        /// The upstream key that held the value.
        field: &'static str,
        /// The offending millisecond count.
        millis: i64,
    },
}
