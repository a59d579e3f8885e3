//! Core types: articles, event conversion, HTML text extraction, iCalendar assembly

pub mod article;
pub mod calendar;
pub mod error;
pub mod event;
pub mod html;

pub use article::CalendarArticle;
pub use calendar::{ICS_ATTRIBUTION, build_calendar};
pub use error::ConvertError;
pub use event::AcademicEvent;
pub use html::extract_text;
