use anyhow::Result;
use ics_export_core::config::ExportConfig;
use ics_export_core::table::visible_columns;
use owo_colors::OwoColorize;

use crate::FeedArgs;
use crate::access;
use crate::render::Render;

pub async fn run(feed: FeedArgs) -> Result<()> {
    let config = ExportConfig::load()?;
    let access = access::guard(&config)?;

    let table = super::load_table(&access, &feed, &config).await?;

    if table.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let columns = visible_columns(&table, config.hide_empty_columns);
    println!("{}", table.render(&columns, &config.labels));

    Ok(())
}
