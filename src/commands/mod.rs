pub mod config;
pub mod export;
pub mod show;

use anyhow::{Context, Result};
use ics_export_core::config::ExportConfig;
use ics_export_core::pipeline::{self, PipelineConfig};
use ics_export_core::{DateRange, EventTable};

use crate::FeedArgs;
use crate::access::Access;
use crate::utils::tui::create_spinner;

impl FeedArgs {
    /// Combine command line arguments with the config file fallbacks.
    fn pipeline_config(&self, config: &ExportConfig) -> Result<PipelineConfig> {
        let url = config.resolve_url(self.url.as_deref())?;
        let range = DateRange::from_args(self.from.as_deref(), self.to.as_deref())?;
        Ok(PipelineConfig { url, range })
    }
}

/// Run the pipeline for the feed. Requires a passed access check.
async fn load_table(_access: &Access, feed: &FeedArgs, config: &ExportConfig) -> Result<EventTable> {
    let pipeline_config = feed.pipeline_config(config)?;

    let spinner = create_spinner(format!("Fetching {}", pipeline_config.url));
    let result = pipeline::run(&pipeline_config).await;
    spinner.finish_and_clear();

    result.with_context(|| format!("Could not build event table for {}", pipeline_config.range))
}
