//! ICS parsing using the icalendar crate's parser.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{IcsExportError, IcsExportResult};
use crate::event::CalendarEvent;

/// Parse calendar text into one CalendarEvent per VEVENT.
///
/// Events come back in document order. A VEVENT whose DTSTART is missing or
/// unreadable is skipped; text that is not a calendar at all is an error.
pub fn extract_events(content: &str) -> IcsExportResult<Vec<CalendarEvent>> {
    let unfolded = unfold(content);

    if !unfolded
        .lines()
        .any(|line| line.trim().eq_ignore_ascii_case("BEGIN:VCALENDAR"))
    {
        return Err(IcsExportError::Parse("No VCALENDAR block found".to_string()));
    }

    let calendar = read_calendar(&unfolded).map_err(|e| IcsExportError::Parse(e.to_string()))?;

    let mut vevents = Vec::new();
    collect_vevents(&calendar.components, &mut vevents);

    let events: Vec<CalendarEvent> = vevents.into_iter().filter_map(to_calendar_event).collect();

    tracing::info!(count = events.len(), "Extracted events from calendar");

    Ok(events)
}

/// Walk the component tree, descending through VCALENDAR wrappers.
fn collect_vevents<'c, 'a>(components: &'c [Component<'a>], out: &mut Vec<&'c Component<'a>>) {
    for component in components {
        if component.name == "VEVENT" {
            out.push(component);
        } else if component.name == "VCALENDAR" {
            collect_vevents(&component.components, out);
        }
    }
}

fn to_calendar_event(vevent: &Component<'_>) -> Option<CalendarEvent> {
    let name = vevent
        .find_prop("SUMMARY")
        .map(|p| unescape_text(p.val.as_ref()))
        .unwrap_or_default();

    let Some(start) = vevent
        .find_prop("DTSTART")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(to_naive)
    else {
        tracing::warn!(summary = %name, "Skipping event without a readable DTSTART");
        return None;
    };

    let end = vevent
        .find_prop("DTEND")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(to_naive)
        .or_else(|| {
            vevent
                .find_prop("DURATION")
                .and_then(|p| parse_duration(p.val.as_ref()))
                .and_then(|duration| start.checked_add_signed(duration))
        });

    let event = CalendarEvent { start, end, name };
    tracing::debug!(%event, "Extracted event");
    Some(event)
}

/// Convert icalendar's DatePerhapsTime to a naive timestamp.
///
/// Zone information is dropped: UTC values keep their UTC wall time and
/// TZID values keep their local wall time. Dates become midnight.
fn to_naive(dpt: DatePerhapsTime) -> NaiveDateTime {
    match dpt {
        DatePerhapsTime::Date(d) => d.and_time(NaiveTime::MIN),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt.naive_utc(),
            CalendarDateTime::Floating(naive) => naive,
            CalendarDateTime::WithTimezone { date_time, .. } => date_time,
        },
    }
}

/// Parse a DURATION value (P1D, PT1H30M, ...). Negative durations are ignored.
fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.starts_with('-') {
        return None;
    }
    let duration = iso8601::duration(value.trim_start_matches('+')).ok()?;
    let std_duration: std::time::Duration = duration.into();
    Duration::from_std(std_duration).ok()
}

/// Undo RFC 5545 TEXT escaping.
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn wrap(vevents: &str) -> String {
        format!(
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:TEST\r\n{}END:VCALENDAR\r\n",
            vevents
        )
    }

    #[test]
    fn test_extracts_timed_and_all_day_events() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
UID:1\r\n\
SUMMARY:Holiday\r\n\
DTSTART;VALUE=DATE:20250101\r\n\
DTEND;VALUE=DATE:20250101\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:2\r\n\
SUMMARY:Meeting\r\n\
DTSTART:20250305T090000\r\n\
DTEND:20250305T100000\r\n\
END:VEVENT\r\n",
        );

        let events = extract_events(&ics).expect("Should parse");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "Holiday");
        assert_eq!(events[0].start, at(2025, 1, 1, 0, 0));
        assert_eq!(events[0].end, Some(at(2025, 1, 1, 0, 0)));
        assert_eq!(events[1].name, "Meeting");
        assert_eq!(events[1].start, at(2025, 3, 5, 9, 0));
        assert_eq!(events[1].end, Some(at(2025, 3, 5, 10, 0)));
    }

    #[test]
    fn test_timezone_is_dropped_not_converted() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
UID:tz\r\n\
SUMMARY:Zoned\r\n\
DTSTART;TZID=Europe/Berlin:20250601T100000\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:floating\r\n\
SUMMARY:Floating\r\n\
DTSTART:20250601T100000\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:utc\r\n\
SUMMARY:Utc\r\n\
DTSTART:20250601T100000Z\r\n\
END:VEVENT\r\n",
        );

        let events = extract_events(&ics).expect("Should parse");

        assert_eq!(events.len(), 3);
        for event in &events {
            assert_eq!(event.start, at(2025, 6, 1, 10, 0), "{}", event.name);
            assert_eq!(event.end, None);
        }
    }

    #[test]
    fn test_duration_fills_missing_end() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
UID:d\r\n\
SUMMARY:Workshop\r\n\
DTSTART:20250310T140000\r\n\
DURATION:PT1H30M\r\n\
END:VEVENT\r\n",
        );

        let events = extract_events(&ics).expect("Should parse");
        assert_eq!(events[0].end, Some(at(2025, 3, 10, 15, 30)));
    }

    #[test]
    fn test_out_of_range_duration_leaves_end_unset() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
UID:huge\r\n\
SUMMARY:Forever\r\n\
DTSTART:20250310T140000\r\n\
DURATION:P100000000D\r\n\
END:VEVENT\r\n",
        );

        let events = extract_events(&ics).expect("Should parse");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, at(2025, 3, 10, 14, 0));
        assert_eq!(events[0].end, None);
    }

    #[test]
    fn test_missing_summary_gives_empty_name() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
UID:x\r\n\
DTSTART:20250310T140000\r\n\
END:VEVENT\r\n",
        );

        let events = extract_events(&ics).expect("Should parse");
        assert_eq!(events[0].name, "");
    }

    #[test]
    fn test_event_without_start_is_skipped() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
UID:nostart\r\n\
SUMMARY:Broken\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:ok\r\n\
SUMMARY:Fine\r\n\
DTSTART:20250310T140000\r\n\
END:VEVENT\r\n",
        );

        let events = extract_events(&ics).expect("Should parse");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Fine");
    }

    #[test]
    fn test_summary_is_unescaped_and_unfolded() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
UID:esc\r\n\
SUMMARY:Lunch\\, then \r\n a walk\\; maybe\r\n\
DTSTART:20250310T120000\r\n\
END:VEVENT\r\n",
        );

        let events = extract_events(&ics).expect("Should parse");
        assert_eq!(events[0].name, "Lunch, then a walk; maybe");
    }

    #[test]
    fn test_non_calendar_text_is_a_parse_error() {
        let err = extract_events("<html><body>Not found</body></html>").unwrap_err();
        assert!(matches!(err, IcsExportError::Parse(_)));
    }

    #[test]
    fn test_empty_calendar_has_no_events() {
        let events = extract_events(&wrap("")).expect("Should parse");
        assert!(events.is_empty());
    }

    #[test]
    fn test_unescape_text() {
        assert_eq!(unescape_text(r"a\,b\;c\\d\ne"), "a,b;c\\d\ne");
        assert_eq!(unescape_text("trailing\\"), "trailing\\");
    }
}
