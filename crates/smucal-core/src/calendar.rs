//! iCalendar document assembly.

use icalendar::{Calendar, Property};

use crate::event::AcademicEvent;

/// Document-level attribution carried in the PRODID property.
pub const ICS_ATTRIBUTION: &str = "상명대학교<@smu.ac.kr>, 김동주<hepheir@gmail.com>";

/// Builds the output document from events already in output order.
pub fn build_calendar<'a>(events: impl IntoIterator<Item = &'a AcademicEvent>) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.append_property(Property::new("PRODID", ICS_ATTRIBUTION));
    for event in events {
        calendar.push(event.to_ics());
    }
    calendar.done()
}
