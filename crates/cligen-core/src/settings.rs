//! Layered settings for the scaffolder
//!
//! Settings are resolved with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. YAML settings file (`~/.cligen.yaml`, or an explicit path)
//! 3. Environment variables (`CLIGEN_*` prefix)
//! 4. CLI flags (applied by the caller)

use std::env;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::licenses::{copyright_line, License, LicenseProvider};
use crate::project::DEFAULT_COMMAND_DIR;
use crate::templates::{DirectoryTemplates, EmbeddedTemplates, TemplateSource};

/// Default settings file name in the home directory
pub const SETTINGS_FILE: &str = ".cligen.yaml";

/// Author used when none is configured
pub const DEFAULT_AUTHOR: &str = "NAME HERE <EMAIL ADDRESS>";

/// License used when none is configured
pub const DEFAULT_LICENSE: &str = "none";

/// Source extension for directory templates when none is configured
pub const DEFAULT_EXTENSION: &str = "go";

/// Resolved scaffolder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Author placed in the copyright line
    pub author: String,
    /// License name looked up in the catalog
    pub license: String,
    /// Custom license text; bypasses the catalog when set
    pub license_text: Option<String>,
    /// Custom license header; bypasses the catalog when set
    pub license_header: Option<String>,
    /// Emit the configuration-library code path
    pub use_config: bool,
    /// Fixed copyright year
    pub year: Option<i32>,
    /// Command subdirectory (`main` for none)
    pub command_dir: String,
    /// Directory holding `main.tera`, `root.tera` and `command.tera`
    pub templates_dir: Option<Utf8PathBuf>,
    /// Source extension for directory templates
    pub extension: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            license_text: None,
            license_header: None,
            use_config: false,
            year: None,
            command_dir: DEFAULT_COMMAND_DIR.to_string(),
            templates_dir: None,
            extension: None,
        }
    }
}

/// Settings file contents; absent keys keep the lower layer's value
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct SettingsFile {
    author: Option<String>,
    license: Option<String>,
    license_text: Option<String>,
    license_header: Option<String>,
    use_config: Option<bool>,
    year: Option<i32>,
    command_dir: Option<String>,
    templates_dir: Option<Utf8PathBuf>,
    extension: Option<String>,
}

impl Settings {
    /// Copyright line for the configured author and year
    pub fn copyright(&self) -> String {
        copyright_line(&self.author, self.year)
    }

    /// Resolve the configured license.
    ///
    /// A custom text or header takes precedence over the catalog.
    pub fn resolve_license(&self, provider: &dyn LicenseProvider) -> Result<License> {
        if self.license_text.is_some() || self.license_header.is_some() {
            let name = if self.license.is_empty() || self.license == DEFAULT_LICENSE {
                "custom"
            } else {
                self.license.as_str()
            };
            return Ok(License::new(name)
                .with_text(self.license_text.clone().unwrap_or_default())
                .with_header(self.license_header.clone().unwrap_or_default()));
        }
        provider.license(&self.license)
    }

    /// Template source for the configured templates directory
    pub fn template_source(&self) -> Box<dyn TemplateSource> {
        match &self.templates_dir {
            Some(dir) => Box::new(DirectoryTemplates::new(
                dir.clone(),
                self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION),
            )),
            None => Box::new(EmbeddedTemplates::new()),
        }
    }

    fn merge_file(mut self, file: SettingsFile) -> Self {
        if let Some(v) = file.author {
            self.author = v;
        }
        if let Some(v) = file.license {
            self.license = v;
        }
        if file.license_text.is_some() {
            self.license_text = file.license_text;
        }
        if file.license_header.is_some() {
            self.license_header = file.license_header;
        }
        if let Some(v) = file.use_config {
            self.use_config = v;
        }
        if file.year.is_some() {
            self.year = file.year;
        }
        if let Some(v) = file.command_dir {
            self.command_dir = v;
        }
        if file.templates_dir.is_some() {
            self.templates_dir = file.templates_dir;
        }
        if file.extension.is_some() {
            self.extension = file.extension;
        }
        self
    }

    fn apply_env_overrides(mut self) -> Result<Self> {
        if let Ok(val) = env::var("CLIGEN_AUTHOR") {
            self.author = val;
        }

        if let Ok(val) = env::var("CLIGEN_LICENSE") {
            self.license = val;
        }

        if let Ok(val) = env::var("CLIGEN_USE_CONFIG") {
            self.use_config = val
                .parse()
                .map_err(|_| Error::invalid_config("CLIGEN_USE_CONFIG must be true or false"))?;
        }

        if let Ok(val) = env::var("CLIGEN_YEAR") {
            self.year = Some(
                val.parse()
                    .map_err(|_| Error::invalid_config("CLIGEN_YEAR must be a valid year"))?,
            );
        }

        if let Ok(val) = env::var("CLIGEN_COMMAND_DIR") {
            self.command_dir = val;
        }

        if let Ok(val) = env::var("CLIGEN_TEMPLATES_DIR") {
            self.templates_dir = Some(Utf8PathBuf::from(val));
        }

        Ok(self)
    }
}

/// Loads [`Settings`] from defaults, a settings file and the environment
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    path: Option<Utf8PathBuf>,
    required: bool,
}

impl SettingsLoader {
    /// Loader for `~/.cligen.yaml`; a missing file is not an error
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
            required: false,
        }
    }

    /// Loader for an explicitly requested file, which must exist
    pub fn with_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            required: true,
        }
    }

    /// Loader that skips the settings file layer
    pub fn without_file() -> Self {
        Self {
            path: None,
            required: false,
        }
    }

    /// Settings file in the home directory, preferring `$HOME`
    fn default_path() -> Option<Utf8PathBuf> {
        let home = env::var("HOME")
            .ok()
            .map(Utf8PathBuf::from)
            .or_else(|| dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok()))?;
        Some(home.join(SETTINGS_FILE))
    }

    /// Settings file this loader reads, if any
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Resolve settings
    pub fn load(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.path {
            if path.exists() {
                debug!("Loading settings from {}", path);
                settings = settings.merge_file(Self::load_yaml_file(path)?);
            } else if self.required {
                return Err(Error::invalid_config(format!(
                    "Settings file not found: {}",
                    path
                )));
            }
        }

        settings.apply_env_overrides()
    }

    fn load_yaml_file(path: &Utf8Path) -> Result<SettingsFile> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(SettingsFile::default());
        }
        Ok(serde_yaml_ng::from_str(&content)?)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
