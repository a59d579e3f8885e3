//! Output document write.

use std::fs;
use std::path::Path;

use icalendar::Calendar;

use crate::error::RunResult;

/// Relative path the published calendar is written to.
pub const OUTPUT_PATH: &str = "docs/calendar.ics";

/// Writes the serialized calendar, creating parent directories as needed.
pub fn write_calendar(path: &Path, calendar: &Calendar) -> RunResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, calendar.to_string())?;
    Ok(())
}
