//! Orchestrates the yearly crawl and publishes the iCalendar document.

pub mod error;
pub mod output;
pub mod plan;
pub mod run;

pub use error::{RunError, RunResult};
pub use run::run;
