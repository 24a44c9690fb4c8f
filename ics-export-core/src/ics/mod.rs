//! Reading events out of iCalendar (RFC 5545) text.

mod parse;

pub use parse::extract_events;
