//! Command handlers
//!
//! Each handler resolves settings (file, environment, flags), builds the
//! core models and reports what was written.

pub mod add;
pub mod init;
pub mod licenses;
pub mod settings;

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use cligen_core::{Settings, SettingsLoader};
use tracing::debug;

use crate::cli::SettingsArgs;

/// Load settings from `config` (or the default file) and apply flag overrides
pub(crate) fn resolve_settings(
    config: Option<&Utf8Path>,
    overrides: SettingsArgs,
) -> Result<Settings> {
    let loader = match config {
        Some(path) => SettingsLoader::with_file(path),
        None => SettingsLoader::new(),
    };
    let mut settings = loader.load().context("Failed to load settings")?;
    overrides.apply(&mut settings);
    debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

/// Absolute project directory for an optional user-supplied path
pub(crate) fn project_dir(path: Option<Utf8PathBuf>) -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;
    Ok(match path {
        Some(p) if p.is_absolute() => p,
        Some(p) => cwd.join(p),
        None => cwd,
    })
}

/// Package name from the flag, or the directory name
pub(crate) fn package_name(flag: Option<&str>, dir: &Utf8Path) -> Result<String> {
    let name = match flag {
        Some(name) => name,
        None => dir
            .file_name()
            .ok_or_else(|| anyhow!("Cannot derive a package name from {}", dir))?,
    };
    Ok(cligen_core::names::package_name(name)?.to_string())
}
