use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ics_export_core::config::ExportConfig;
use ics_export_core::{ExportFormat, export};
use owo_colors::OwoColorize;

use crate::FeedArgs;
use crate::access;

pub async fn run(
    feed: FeedArgs,
    formats: Vec<ExportFormat>,
    output: Option<PathBuf>,
    to_stdout: bool,
) -> Result<()> {
    let config = ExportConfig::load()?;
    let access = access::guard(&config)?;

    let table = super::load_table(&access, &feed, &config).await?;
    let options = config.export_options();

    if to_stdout {
        let bytes = export(&table, ExportFormat::Csv, &options)?;
        std::io::stdout()
            .write_all(&bytes)
            .context("Could not write to stdout")?;
        return Ok(());
    }

    let dir = output.unwrap_or_else(|| config.output_path());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create output directory {}", dir.display()))?;

    let mut written: Vec<ExportFormat> = Vec::new();
    for format in formats {
        if written.contains(&format) {
            continue;
        }

        let bytes = export(&table, format, &options)?;
        let path = dir.join(format.suggested_filename());
        std::fs::write(&path, &bytes)
            .with_context(|| format!("Could not write {}", path.display()))?;

        println!(
            "{} {} {}",
            "Wrote".green(),
            path.display(),
            format!("({} events)", table.len()).dimmed()
        );
        written.push(format);
    }

    Ok(())
}
