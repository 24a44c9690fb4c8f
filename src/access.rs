//! Optional password gate in front of the pipeline.

use anyhow::{Context, Result};
use ics_export_core::config::ExportConfig;

/// Proof that the access check passed. Only [`guard`] creates one.
pub struct Access(());

/// Ask for the configured password, if there is one.
pub fn guard(config: &ExportConfig) -> Result<Access> {
    let Some(expected) = config.password.as_deref() else {
        return Ok(Access(()));
    };

    let entered = rpassword::prompt_password("Password: ").context("Could not read password")?;
    check(expected, &entered)
}

fn check(expected: &str, entered: &str) -> Result<Access> {
    if entered != expected {
        tracing::warn!("Rejected incorrect password");
        anyhow::bail!("Incorrect password");
    }
    Ok(Access(()))
}
