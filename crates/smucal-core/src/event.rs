//! Article-to-event conversion and VEVENT rendering.
//!
//! [`AcademicEvent`] is the output form of one calendar entry: an all-day
//! event with day-granularity start/end, plain-text description, and a
//! deep link back into the university board UI.

use chrono::{DateTime, NaiveDate, Utc};
use icalendar::{Component, Event, EventLike};

use crate::article::CalendarArticle;
use crate::error::ConvertError;
use crate::html::extract_text;

/// Deep-link base into the academic-calendar board UI.
const ARTICLE_URL_BASE: &str = "https://www.smu.ac.kr/kor/life/academicCalendar.do";

/// The output form of one academic-calendar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademicEvent {
    /// The article number; serialized as the event uid.
    pub article_no: u64,
    /// Display title.
    pub title: String,
    /// Markup-stripped body.
    pub description: String,
    /// First day of the event.
    pub start: NaiveDate,
    /// Last day of the event, inclusive. Always `>= start`.
    pub end: NaiveDate,
    /// Creation time of the upstream article.
    pub created: DateTime<Utc>,
    /// Last update time of the upstream article.
    pub last_modified: DateTime<Utc>,
    /// Deep link into the board UI.
    pub url: String,
}

impl AcademicEvent {
    /// Converts a raw article into its output event.
    ///
    /// Upstream same-day entries occasionally list an end date before the
    /// start date; those collapse to a single day on the later of the two
    /// dates instead of being rejected. This mirrors the upstream data and
    /// is not a guarantee about arbitrary malformed input.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] when a date field does not parse as
    /// `YYYY-MM-DD` or a millisecond timestamp is out of range.
    pub fn from_article(article: &CalendarArticle) -> Result<Self, ConvertError> {
        let start = parse_date("etcChar6", &article.etc_char6)?;
        let end = parse_date("etcChar7", &article.etc_char7)?;

        Ok(Self {
            article_no: article.article_no,
            title: article.article_title.clone(),
            description: extract_text(&article.article_text),
            start,
            end: start.max(end),
            created: parse_millis("createDt", article.create_dt)?,
            last_modified: parse_millis("updateDt", article.update_dt)?,
            url: format!(
                "{ARTICLE_URL_BASE}?mode=view&articleNo={}&boardNo={}",
                article.article_no, article.board_no
            ),
        })
    }

    /// Renders the event as an all-day VEVENT.
    ///
    /// DTSTART and DTEND are date-valued; DTEND follows the RFC 5545
    /// exclusive convention, the day after the last day of the event.
    pub fn to_ics(&self) -> Event {
        let dtend = self.end.succ_opt().unwrap_or(self.end);
        Event::new()
            .uid(&self.article_no.to_string())
            .summary(&self.title)
            .description(&self.description)
            .starts(self.start)
            .ends(dtend)
            .add_property("URL", &self.url)
            .add_property("CREATED", &format_utc(self.created))
            .add_property("LAST-MODIFIED", &format_utc(self.last_modified))
            .done()
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ConvertError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| ConvertError::DateFormat {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_millis(field: &'static str, millis: i64) -> Result<DateTime<Utc>, ConvertError> {
    DateTime::from_timestamp_millis(millis).ok_or(ConvertError::Timestamp { field, millis })
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
