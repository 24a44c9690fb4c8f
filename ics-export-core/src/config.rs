//! User configuration at ~/.config/ics-export/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{IcsExportError, IcsExportResult};
use crate::export::ExportOptions;
use crate::table::Labels;

static DEFAULT_OUTPUT_DIR: &str = ".";
static DEFAULT_DOCUMENT_TITLE: &str = "Events";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_document_title() -> String {
    DEFAULT_DOCUMENT_TITLE.to_string()
}

/// Settings for the front-end. Nothing in here is read by the pipeline
/// stages directly; the CLI turns it into a `PipelineConfig` and
/// `ExportOptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Feed used when no URL is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_document_title")]
    pub document_title: String,

    #[serde(default)]
    pub hide_empty_columns: bool,

    /// When set, the CLI asks for it before running
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    #[serde(default)]
    pub labels: Labels,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            default_url: None,
            output_dir: default_output_dir(),
            document_title: default_document_title(),
            hide_empty_columns: false,
            password: None,
            labels: Labels::default(),
        }
    }
}

impl ExportConfig {
    pub fn config_path() -> IcsExportResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IcsExportError::Config("Could not determine config directory".into()))?
            .join("ics-export");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented default file on first use.
    pub fn load() -> IcsExportResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> IcsExportResult<Self> {
        let config: ExportConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| IcsExportError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| IcsExportError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> IcsExportResult<()> {
        let contents = format!(
            "\
# ics-export configuration

# Feed to use when no URL is passed on the command line:
# default_url = \"https://example.com/calendar.ics\"

# Where exported files are written:
# output_dir = \"{}\"

# Heading of the docx export:
# document_title = \"{}\"

# Drop the End Date / Time columns when no event fills them:
# hide_empty_columns = false

# Ask for this password before fetching anything:
# password = \"secret\"

# Column headers:
# [labels]
# start_date = \"Start Date\"
# end_date = \"End Date\"
# time = \"Time\"
# title = \"Event Name\"
",
            DEFAULT_OUTPUT_DIR, DEFAULT_DOCUMENT_TITLE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                IcsExportError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| IcsExportError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Pick the command line URL, falling back to `default_url`.
    pub fn resolve_url(&self, url: Option<&str>) -> IcsExportResult<String> {
        url.map(str::to_string)
            .or_else(|| self.default_url.clone())
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                IcsExportError::Config(
                    "No calendar URL given and no default_url in config.toml".to_string(),
                )
            })
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            labels: self.labels.clone(),
            document_title: self.document_title.clone(),
            hide_empty_columns: self.hide_empty_columns,
        }
    }

    /// Effective settings as TOML. The password is never included.
    pub fn to_toml(&self) -> IcsExportResult<String> {
        toml::to_string_pretty(self).map_err(|e| IcsExportError::Config(e.to_string()))
    }
}
