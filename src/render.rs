//! Terminal rendering for event tables.

use ics_export_core::EventTable;
use ics_export_core::table::{Column, Labels};
use owo_colors::OwoColorize;

/// Column separator
const GAP: &str = "  ";

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, columns: &[Column], labels: &Labels) -> String;
}

impl Render for EventTable {
    fn render(&self, columns: &[Column], labels: &Labels) -> String {
        let widths: Vec<usize> = columns
            .iter()
            .map(|column| {
                self.rows()
                    .iter()
                    .map(|row| width(column.value(row)))
                    .chain(std::iter::once(width(column.label(labels))))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.len() + 1);

        let header = columns
            .iter()
            .zip(&widths)
            .map(|(column, w)| pad(column.label(labels), *w))
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(header.trim_end().bold().to_string());

        for row in self.rows() {
            let line = columns
                .iter()
                .zip(&widths)
                .map(|(column, w)| pad(column.value(row), *w))
                .collect::<Vec<_>>()
                .join(GAP);
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ics_export_core::CalendarEvent;
    use ics_export_core::table::format_events;

    #[test]
    fn columns_are_aligned() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let table = format_events(&[
            CalendarEvent::new(day.and_hms_opt(9, 0, 0).unwrap(), None, "Meeting"),
            CalendarEvent::new(day.and_hms_opt(0, 0, 0).unwrap(), None, "Holiday"),
        ]);

        let out = table.render(&Column::ALL, &Labels::default());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Start Date    End Date  Time   Event Name"));
        assert_eq!(lines[1], "05. 03. 2025                   Holiday");
        assert_eq!(lines[2], "05. 03. 2025            09:00  Meeting");
    }
}
