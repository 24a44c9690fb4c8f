use anyhow::Result;
use ics_export_core::config::ExportConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = ExportConfig::config_path()?;
    let config = ExportConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Output:  {}", config.output_path().display());

    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }
    if config.password.is_some() {
        println!("  {}", "(password protected)".dimmed());
    }

    Ok(())
}
