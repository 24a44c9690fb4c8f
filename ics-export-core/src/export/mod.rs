//! Serializers from an [`EventTable`] to downloadable payloads.
//!
//! Exporters never filter or reorder; they write the table as given, using
//! the columns chosen by [`visible_columns`].

mod delimited;
mod document;
mod spreadsheet;

pub use delimited::read_csv;

use serde::{Deserialize, Serialize};

use crate::error::{IcsExportError, IcsExportResult};
use crate::table::{EventTable, Labels, visible_columns};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Docx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Docx];

    pub fn suggested_filename(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "events.csv",
            ExportFormat::Xlsx => "events.xlsx",
            ExportFormat::Docx => "events.docx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Docx => "docx",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = IcsExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "docx" => Ok(ExportFormat::Docx),
            other => Err(IcsExportError::Config(format!(
                "Unknown export format '{}'. Expected csv, xlsx or docx",
                other
            ))),
        }
    }
}

/// Presentation settings shared by every exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub labels: Labels,
    /// Heading written above the document table
    pub document_title: String,
    pub hide_empty_columns: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            labels: Labels::default(),
            document_title: "Events".to_string(),
            hide_empty_columns: false,
        }
    }
}

/// Serialize the table into a complete in-memory payload.
pub fn export(
    table: &EventTable,
    format: ExportFormat,
    options: &ExportOptions,
) -> IcsExportResult<Vec<u8>> {
    let columns = visible_columns(table, options.hide_empty_columns);

    let bytes = match format {
        ExportFormat::Csv => delimited::write_csv(table, &columns, &options.labels)?,
        ExportFormat::Xlsx => spreadsheet::write_xlsx(table, &columns, &options.labels)?,
        ExportFormat::Docx => document::write_docx(
            table,
            &columns,
            &options.labels,
            &options.document_title,
        )?,
    };

    tracing::info!(%format, rows = table.len(), bytes = bytes.len(), "Exported table");

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_roundtrip_through_from_str() {
        for format in ExportFormat::ALL {
            let parsed: ExportFormat = format.to_string().parse().unwrap();
            assert_eq!(parsed, format);
        }
        assert_eq!("XLSX".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(IcsExportError::Config(_))
        ));
    }

    #[test]
    fn suggested_filenames_are_fixed() {
        assert_eq!(ExportFormat::Csv.suggested_filename(), "events.csv");
        assert_eq!(ExportFormat::Xlsx.suggested_filename(), "events.xlsx");
        assert_eq!(ExportFormat::Docx.suggested_filename(), "events.docx");
    }
}
