//! Yearly fetch of academic-calendar articles from the university endpoint.

pub mod client;
pub mod error;

pub use client::{CalendarClient, DEFAULT_TIMEOUT, parse_response};
pub use error::{CrawlError, CrawlResult};
