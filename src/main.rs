mod access;
mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ics_export_core::ExportFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ics-export")]
#[command(version, about = "Fetch an ICS calendar feed and export its events as a table")]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which feed to read and which days to keep.
#[derive(Args)]
pub struct FeedArgs {
    /// ICS feed URL (http, https or webcal). Defaults to default_url from config
    pub url: Option<String>,

    /// Keep events from this date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub from: Option<String>,

    /// Keep events until this date (YYYY-MM-DD, defaults to a year after --from)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the event table in the terminal
    Show {
        #[command(flatten)]
        feed: FeedArgs,
    },
    /// Write the event table to csv, xlsx and/or docx files
    Export {
        #[command(flatten)]
        feed: FeedArgs,

        /// Output format; repeat for several (csv, xlsx, docx)
        #[arg(short, long = "format", default_value = "csv")]
        formats: Vec<ExportFormat>,

        /// Directory to write into (defaults to output_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write csv to stdout instead of files
        #[arg(long, conflicts_with_all = ["output", "formats"])]
        stdout: bool,
    },
    /// Show config file location and effective settings
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show { feed } => commands::show::run(feed).await,
        Commands::Export {
            feed,
            formats,
            output,
            stdout,
        } => commands::export::run(feed, formats, output, stdout).await,
        Commands::Config => commands::config::run(),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ics_export=debug,ics_export_core=debug"
    } else {
        "ics_export=warn,ics_export_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
