//! Calendar events as extracted from a feed.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single VEVENT reduced to what the table needs.
///
/// Timestamps are naive: any zone information on the source property has
/// already been dropped by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub name: String,
}

impl CalendarEvent {
    pub fn new(start: NaiveDateTime, end: Option<NaiveDateTime>, name: impl Into<String>) -> Self {
        CalendarEvent {
            start,
            end,
            name: name.into(),
        }
    }

    /// Time between start and end, if the event has an end.
    pub fn duration(&self) -> Option<Duration> {
        self.end.map(|end| end - self.start)
    }
}

impl std::fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{} ({} - {})", self.name, self.start, end),
            None => write!(f, "{} ({})", self.name, self.start),
        }
    }
}
