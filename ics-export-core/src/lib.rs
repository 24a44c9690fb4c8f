//! Core of ics-export: turn an ICS feed into a date-filtered event table.
//!
//! The pipeline runs strictly in sequence:
//! - `fetch` downloads the feed
//! - `ics` extracts one `CalendarEvent` per VEVENT
//! - `filter` keeps the events inside a `DateRange`
//! - `table` formats them into a sorted `EventTable`
//! - `export` serializes the table as csv, xlsx or docx

pub mod config;
pub mod date_range;
pub mod error;
pub mod event;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod ics;
pub mod pipeline;
pub mod table;

pub use date_range::DateRange;
pub use error::{IcsExportError, IcsExportResult};
pub use event::CalendarEvent;
pub use export::{ExportFormat, ExportOptions, export};
pub use pipeline::PipelineConfig;
pub use table::{DisplayRow, EventTable};
