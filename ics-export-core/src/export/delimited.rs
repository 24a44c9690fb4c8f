//! Comma separated text export.

use crate::error::{IcsExportError, IcsExportResult};
use crate::table::{Column, EventTable, Labels};

/// UTF-8 CSV with a header row.
pub(super) fn write_csv(
    table: &EventTable,
    columns: &[Column],
    labels: &Labels,
) -> IcsExportResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.label(labels)))?;
    for row in table.rows() {
        writer.write_record(columns.iter().map(|c| c.value(row)))?;
    }

    writer
        .into_inner()
        .map_err(|e| IcsExportError::Export(e.to_string()))
}

/// Read a CSV payload back into its data rows, header skipped.
pub fn read_csv(bytes: &[u8]) -> IcsExportResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    reader
        .records()
        .map(|record| -> IcsExportResult<Vec<String>> {
            let record = record?;
            Ok(record.iter().map(str::to_string).collect())
        })
        .collect()
}
