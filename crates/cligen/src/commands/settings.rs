//! `cligen settings` command handler

use anyhow::{Context, Result};
use camino::Utf8Path;

use crate::cli::SettingsArgs;

/// Print resolved settings as YAML
pub fn run(config: Option<&Utf8Path>) -> Result<()> {
    let settings = super::resolve_settings(config, SettingsArgs::default())?;
    let yaml = serde_yaml_ng::to_string(&settings).context("Failed to serialize settings")?;
    print!("{}", yaml);
    Ok(())
}
