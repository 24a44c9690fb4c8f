//! The fetch, extract, filter, format sequence for one run.

use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::error::IcsExportResult;
use crate::fetch::fetch;
use crate::filter::filter_events;
use crate::ics::extract_events;
use crate::table::{EventTable, format_events};

/// Inputs for one run. Read only; the pipeline never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub url: String,
    pub range: DateRange,
}

/// Fetch the feed and turn it into a table.
///
/// A fetch or parse failure aborts the run; no partial table is returned.
pub async fn run(config: &PipelineConfig) -> IcsExportResult<EventTable> {
    let raw = fetch(&config.url).await?;
    build_table(&raw, &config.range)
}

/// Everything after the fetch: extract, filter and format.
pub fn build_table(raw: &str, range: &DateRange) -> IcsExportResult<EventTable> {
    let events = extract_events(raw)?;
    let kept = filter_events(events, range);
    Ok(format_events(&kept))
}
