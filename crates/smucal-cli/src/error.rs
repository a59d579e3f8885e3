//! Error types for the end-to-end run.

use std::io;

use thiserror::Error;

/// Result type for the end-to-end run.
pub type RunResult<T> = Result<T, RunError>;

/// Errors that abort the run.
///
/// Per-year crawl and conversion failures never reach this type; they are
/// logged at the year loop and skipped. Only the final output write is
/// fatal.
#[derive(Debug, Error)]
pub enum RunError {
    /// Output file or directory could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Failure of a single year's crawl-and-convert attempt.
///
/// Caught at the year loop boundary and reported with the severity of the
/// year's priority; never escalated to a [`RunError`].
#[derive(Debug, Error)]
pub enum YearError {
    #[error(transparent)]
    Crawl(#[from] smucal_crawler::CrawlError),

    #[error(transparent)]
    Convert(#[from] smucal_core::ConvertError),
}
