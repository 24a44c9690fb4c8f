//! Spreadsheet (xlsx) export.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::IcsExportResult;
use crate::table::{Column, EventTable, Labels};

const SHEET_NAME: &str = "Events";

/// One worksheet: bold header row, then one row per table row.
pub(super) fn write_xlsx(
    table: &EventTable,
    columns: &[Column],
    labels: &Labels,
) -> IcsExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, column) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.label(labels), &header_format)?;
    }

    for (index, row) in table.rows().iter().enumerate() {
        let sheet_row = index as u32 + 1;
        for (col, column) in columns.iter().enumerate() {
            let value = column.value(row);
            if !value.is_empty() {
                worksheet.write_string(sheet_row, col as u16, value)?;
            }
        }
    }

    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}
