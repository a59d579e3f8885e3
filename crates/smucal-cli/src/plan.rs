//! Year targeting policy.
//!
//! The run crawls a fixed window around the current year. Years close to
//! now are expected to have a published calendar; the wider window is
//! best-effort (a year two summers out usually has nothing yet). The
//! pairing of year and failure severity lives here as one table instead
//! of two duplicated loops.

/// How a target year's fetch failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Expected to succeed; failure is logged as an error.
    Primary,
    /// Nice to have; failure is only a warning.
    Additional,
}

/// One year to crawl, paired with its failure severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTarget {
    pub year: i32,
    pub priority: Priority,
}

/// Offsets from the current year crawled as primary targets.
const PRIMARY_OFFSETS: [i32; 3] = [-1, 0, 1];
/// Offsets crawled best-effort.
const ADDITIONAL_OFFSETS: [i32; 3] = [-3, -2, 2];

/// Builds the ordered fetch plan for a run: primary years first, then the
/// best-effort window.
pub fn fetch_plan(current_year: i32) -> Vec<YearTarget> {
    PRIMARY_OFFSETS
        .iter()
        .map(|offset| YearTarget {
            year: current_year + offset,
            priority: Priority::Primary,
        })
        .chain(ADDITIONAL_OFFSETS.iter().map(|offset| YearTarget {
            year: current_year + offset,
            priority: Priority::Additional,
        }))
        .collect()
}
