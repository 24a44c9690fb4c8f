//! Word processing document (docx) export.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use crate::error::{IcsExportError, IcsExportResult};
use crate::table::{Column, EventTable, Labels};

/// Heading size in half-points
const HEADING_SIZE: usize = 32;

fn cell(text: &str, bold: bool) -> TableCell {
    let run = Run::new().add_text(text);
    let run = if bold { run.bold() } else { run };
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}

/// A heading followed by a grid table with a header row.
fn build_docx(table: &EventTable, columns: &[Column], labels: &Labels, title: &str) -> Docx {
    let mut rows = Vec::with_capacity(table.len() + 1);
    rows.push(TableRow::new(
        columns.iter().map(|c| cell(c.label(labels), true)).collect(),
    ));
    for row in table.rows() {
        rows.push(TableRow::new(
            columns.iter().map(|c| cell(c.value(row), false)).collect(),
        ));
    }

    let heading = Paragraph::new().add_run(Run::new().add_text(title).bold().size(HEADING_SIZE));

    Docx::new().add_paragraph(heading).add_table(Table::new(rows))
}

pub(super) fn write_docx(
    table: &EventTable,
    columns: &[Column],
    labels: &Labels,
    title: &str,
) -> IcsExportResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    build_docx(table, columns, labels, title)
        .build()
        .pack(&mut buffer)
        .map_err(|e| IcsExportError::Export(e.to_string()))?;

    Ok(buffer.into_inner())
}
