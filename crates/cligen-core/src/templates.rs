//! Template sources for generated files
//!
//! A [`TemplateSource`] hands out the three bodies the scaffolder needs
//! (entry point, root command, sub-command) along with the source extension
//! of the generated language. Two sources ship with the crate:
//! - [`EmbeddedTemplates`]: cobra-style Go templates compiled into the binary
//! - [`DirectoryTemplates`]: `main.tera`, `root.tera` and `command.tera`
//!   read from a user directory at runtime

use std::borrow::Cow;
use std::fmt;
use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;

use crate::error::{Error, Result};

/// Embedded Go templates
#[derive(RustEmbed)]
#[folder = "templates/go/"]
struct GoTemplates;

/// The three files a scaffold is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Program entry point
    Main,
    /// Top-level command that sub-commands attach to
    Root,
    /// One additional sub-command
    Command,
}

impl TemplateKind {
    /// All kinds, in creation order
    pub const ALL: [TemplateKind; 3] = [Self::Main, Self::Root, Self::Command];

    /// Stable template name, also the template file stem
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Root => "root",
            Self::Command => "command",
        }
    }

    /// Template file name inside a template directory
    pub fn file_name(&self) -> String {
        format!("{}.tera", self.as_str())
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supplies template bodies for project and command creation
pub trait TemplateSource {
    /// Body of the template for `kind`
    fn template(&self, kind: TemplateKind) -> Result<Cow<'_, str>>;

    /// Source file extension of the generated language, without the dot
    fn extension(&self) -> &str;
}

/// Go templates compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Source backed by the compiled-in Go templates
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn template(&self, kind: TemplateKind) -> Result<Cow<'_, str>> {
        let file_name = kind.file_name();
        let file =
            GoTemplates::get(&file_name).ok_or_else(|| Error::template_not_found(&file_name))?;
        let body = String::from_utf8(file.data.into_owned()).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in template: {}", file_name))
        })?;
        Ok(Cow::Owned(body))
    }

    fn extension(&self) -> &str {
        "go"
    }
}

/// Templates read from a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: Utf8PathBuf,
    extension: String,
}

impl DirectoryTemplates {
    /// Read templates from `dir`, generating files with `extension`
    pub fn new(dir: impl Into<Utf8PathBuf>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Template directory
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }
}

impl TemplateSource for DirectoryTemplates {
    fn template(&self, kind: TemplateKind) -> Result<Cow<'_, str>> {
        let path = self.dir.join(kind.file_name());
        match std::fs::read_to_string(&path) {
            Ok(body) => Ok(Cow::Owned(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::template_not_found(path.as_str()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn extension(&self) -> &str {
        &self.extension
    }
}
