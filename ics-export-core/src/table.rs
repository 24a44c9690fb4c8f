//! Presentation rows derived from calendar events.
//!
//! The formatter turns filtered events into an [`EventTable`]: string cells
//! ready for display or export, ordered by start time.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;

/// Day-month-year, e.g. "05. 03. 2025"
pub const DATE_FORMAT: &str = "%d. %m. %Y";

/// Hour:minute, e.g. "09:00"
pub const TIME_FORMAT: &str = "%H:%M";

/// One table row. `sort_key` orders the table and is never exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub start_date: String,
    pub end_date: String,
    pub time: String,
    pub title: String,
    pub sort_key: NaiveDateTime,
}

impl DisplayRow {
    pub fn from_event(event: &CalendarEvent) -> Self {
        // Only multi-day events get an end date column
        let end_date = match (event.end, event.duration()) {
            (Some(end), Some(duration)) if duration > Duration::days(1) => {
                end.format(DATE_FORMAT).to_string()
            }
            _ => String::new(),
        };

        // Midnight means all-day (or date-only), not "00:00"
        let time = if event.start.time() == NaiveTime::MIN {
            String::new()
        } else {
            event.start.format(TIME_FORMAT).to_string()
        };

        DisplayRow {
            start_date: event.start.format(DATE_FORMAT).to_string(),
            end_date,
            time,
            title: event.name.clone(),
            sort_key: event.start,
        }
    }
}

/// Rows ordered ascending by start time; equal starts keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    rows: Vec<DisplayRow>,
}

impl EventTable {
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Format events into a sorted table.
pub fn format_events(events: &[CalendarEvent]) -> EventTable {
    let mut rows: Vec<DisplayRow> = events.iter().map(DisplayRow::from_event).collect();
    rows.sort_by_key(|row| row.sort_key);

    tracing::debug!(rows = rows.len(), "Formatted event table");

    EventTable { rows }
}

/// Column header labels. Column meaning and order never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub start_date: String,
    pub end_date: String,
    pub time: String,
    pub title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            start_date: "Start Date".to_string(),
            end_date: "End Date".to_string(),
            time: "Time".to_string(),
            title: "Event Name".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    StartDate,
    EndDate,
    Time,
    Title,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::StartDate, Column::EndDate, Column::Time, Column::Title];

    pub fn label<'l>(&self, labels: &'l Labels) -> &'l str {
        match self {
            Column::StartDate => labels.start_date.as_str(),
            Column::EndDate => labels.end_date.as_str(),
            Column::Time => labels.time.as_str(),
            Column::Title => labels.title.as_str(),
        }
    }

    pub fn value<'r>(&self, row: &'r DisplayRow) -> &'r str {
        match self {
            Column::StartDate => row.start_date.as_str(),
            Column::EndDate => row.end_date.as_str(),
            Column::Time => row.time.as_str(),
            Column::Title => row.title.as_str(),
        }
    }

    /// Columns that may disappear when no row has a value for them.
    fn is_optional(&self) -> bool {
        matches!(self, Column::EndDate | Column::Time)
    }
}

/// Pick the columns to show for a table.
///
/// With `hide_empty` the end date and time columns are dropped when every
/// row leaves them blank. Start date and title always stay.
pub fn visible_columns(table: &EventTable, hide_empty: bool) -> Vec<Column> {
    Column::ALL
        .into_iter()
        .filter(|column| {
            !hide_empty
                || !column.is_optional()
                || table.rows().iter().any(|row| !column.value(row).is_empty())
        })
        .collect()
}
