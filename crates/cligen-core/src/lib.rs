//! # cligen-core
//!
//! Core library for the cligen scaffolder providing:
//! - The [`Project`] and [`Command`] models and their `create` operations
//! - Tera template rendering and template sources
//! - The embedded license catalog and copyright lines
//! - Layered settings (defaults, `~/.cligen.yaml`, `CLIGEN_*` environment)
//!
//! # Example
//!
//! ```no_run
//! use cligen_core::{Command, EmbeddedTemplates, LicenseCatalog, LicenseProvider, Project};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let templates = EmbeddedTemplates::new();
//! let license = LicenseCatalog::embedded()?.license("MIT")?;
//!
//! let project = Project::new("github.com/acme/demo", "/tmp/demo", "Copyright © 2024 Acme")
//!     .with_license(license);
//! project.create(&templates)?;
//!
//! Command::new("serve", "rootCmd", &project).create(&templates)?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod error;
pub mod files;
pub mod licenses;
pub mod names;
pub mod project;
pub mod render;
pub mod settings;
pub mod templates;

pub use command::{Command, ROOT_COMMAND};
pub use error::{Error, Result};
pub use licenses::{copyright_line, License, LicenseCatalog, LicenseProvider};
pub use project::{Project, MAIN_PACKAGE};
pub use settings::{Settings, SettingsLoader};
pub use templates::{DirectoryTemplates, EmbeddedTemplates, TemplateKind, TemplateSource};
