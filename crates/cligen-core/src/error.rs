//! Error types for cligen-core

use camino::Utf8PathBuf;
use thiserror::Error;

/// Result type alias using cligen-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Command created without a parent project
    #[error("Project empty: command '{command}' is not attached to a project")]
    MissingProject { command: String },

    /// Directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target path exists but is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: Utf8PathBuf },

    /// File could not be created or truncated
    #[error("Failed to create file {path}: {source}")]
    CreateFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template parse, lookup or write failure
    #[error("Failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// Template body not available from the source
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// License name not in the catalog
    #[error("Unknown license: {name}. Available licenses: {available}")]
    UnknownLicense { name: String, available: String },

    /// Invalid package or command name
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing project error
    pub fn missing_project(command: impl Into<String>) -> Self {
        Self::MissingProject {
            command: command.into(),
        }
    }

    /// Create a directory creation error
    pub fn create_dir(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a file creation error
    pub fn create_file(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::CreateFile {
            path: path.into(),
            source,
        }
    }

    /// Create a render error
    pub fn render(template: impl Into<String>, source: tera::Error) -> Self {
        Self::Render {
            template: template.into(),
            source,
        }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }

    /// Create an unknown license error
    pub fn unknown_license(name: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownLicense {
            name: name.into(),
            available: available.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// True for errors raised before any filesystem effect
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingProject { .. }
                | Self::InvalidName { .. }
                | Self::InvalidConfig { .. }
                | Self::Yaml(_)
        )
    }
}
