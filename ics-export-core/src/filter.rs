//! Date range filtering.

use crate::date_range::DateRange;
use crate::event::CalendarEvent;

/// Whether an event falls inside the range.
///
/// The start must not precede the range; an end, when present, must not run
/// past it. Events without an end are never excluded by the end bound. An
/// inverted range matches nothing.
pub fn in_range(event: &CalendarEvent, range: &DateRange) -> bool {
    if range.from > range.to || event.start < range.lower_bound() {
        return false;
    }

    match event.end {
        Some(end) => end <= range.upper_bound(),
        None => true,
    }
}

/// Keep only the events that fall inside the range, preserving input order.
pub fn filter_events(events: Vec<CalendarEvent>, range: &DateRange) -> Vec<CalendarEvent> {
    let total = events.len();
    let kept: Vec<CalendarEvent> = events.into_iter().filter(|e| in_range(e, range)).collect();

    tracing::info!(total, kept = kept.len(), %range, "Filtered events by date range");

    kept
}
