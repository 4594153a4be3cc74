//! Project scaffold: directory tree, entry point, root command and LICENSE

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tera::Context;
use tracing::info;

use crate::error::Result;
use crate::files::{ensure_dir, render_file, COMMAND_DIR_MODE, PROJECT_DIR_MODE};
use crate::licenses::License;
use crate::render::context_from;
use crate::templates::{TemplateKind, TemplateSource};

/// Command subdirectory value meaning "commands live next to the entry point"
pub const MAIN_PACKAGE: &str = "main";

/// Default command subdirectory
pub const DEFAULT_COMMAND_DIR: &str = "cmd";

/// Name of the generated license file
pub const LICENSE_FILE: &str = "LICENSE";

/// Base name of the entry-point file
pub const ENTRY_FILE_STEM: &str = "main";

/// Base name of the root-command file
pub const ROOT_FILE_STEM: &str = "root";

/// In-memory model of one generated source tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Module / package identifier of the generated program
    pub package_name: String,
    copyright: String,
    absolute_path: Utf8PathBuf,
    /// Selected license
    pub license: License,
    /// Emit the configuration-library code path in generated sources
    pub use_config: bool,
    /// Name shown in generated help text
    pub app_name: String,
    /// Directory for command files, relative to the project root
    pub command_subdirectory: String,
}

/// Template view of a project: its fields plus the derived command path
#[derive(Debug, Serialize)]
pub(crate) struct ProjectView<'a> {
    #[serde(flatten)]
    project: &'a Project,
    command_path: &'a str,
}

impl Project {
    /// Create a project rooted at `absolute_path`.
    ///
    /// The app name defaults to the last path segment of `package_name`, the
    /// license to an empty `none` license and the command directory to `cmd`.
    pub fn new(
        package_name: impl Into<String>,
        absolute_path: impl Into<Utf8PathBuf>,
        copyright: impl Into<String>,
    ) -> Self {
        let package_name = package_name.into();
        let app_name = package_name
            .rsplit('/')
            .next()
            .unwrap_or(package_name.as_str())
            .to_string();
        Self {
            package_name,
            copyright: copyright.into(),
            absolute_path: absolute_path.into(),
            license: License::new("none"),
            use_config: false,
            app_name,
            command_subdirectory: DEFAULT_COMMAND_DIR.to_string(),
        }
    }

    /// Set the license
    pub fn with_license(mut self, license: License) -> Self {
        self.license = license;
        self
    }

    /// Toggle the configuration-library code path
    pub fn with_use_config(mut self, use_config: bool) -> Self {
        self.use_config = use_config;
        self
    }

    /// Set the app name
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Set the command subdirectory (`"main"` for none)
    pub fn with_command_subdirectory(mut self, subdirectory: impl Into<String>) -> Self {
        self.command_subdirectory = subdirectory.into();
        self
    }

    /// Copyright line computed at construction
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Project root directory
    pub fn absolute_path(&self) -> &Utf8Path {
        &self.absolute_path
    }

    /// Command subdirectory relative to the root; empty for the `main` sentinel
    pub fn command_path(&self) -> &str {
        if self.command_subdirectory == MAIN_PACKAGE {
            ""
        } else {
            &self.command_subdirectory
        }
    }

    /// Directory command files are written to
    pub fn command_dir(&self) -> Utf8PathBuf {
        match self.command_path() {
            "" => self.absolute_path.clone(),
            sub => self.absolute_path.join(sub),
        }
    }

    /// Path of the entry-point file for `extension`
    pub fn entry_file(&self, extension: &str) -> Utf8PathBuf {
        self.absolute_path
            .join(format!("{}.{}", ENTRY_FILE_STEM, extension))
    }

    /// Path of the root-command file for `extension`
    pub fn root_file(&self, extension: &str) -> Utf8PathBuf {
        self.command_dir()
            .join(format!("{}.{}", ROOT_FILE_STEM, extension))
    }

    /// Path of the license file
    pub fn license_file(&self) -> Utf8PathBuf {
        self.absolute_path.join(LICENSE_FILE)
    }

    pub(crate) fn view(&self) -> ProjectView<'_> {
        ProjectView {
            project: self,
            command_path: self.command_path(),
        }
    }

    /// Ensure the command directory exists
    pub(crate) fn ensure_command_dir(&self) -> Result<Utf8PathBuf> {
        let dir = self.command_dir();
        ensure_dir(&dir, COMMAND_DIR_MODE)?;
        Ok(dir)
    }

    /// Write the scaffold to disk.
    ///
    /// Steps run in order and stop at the first failure; files written by
    /// earlier steps are left in place. Existing files are truncated.
    /// Returns the files written.
    pub fn create(&self, templates: &dyn TemplateSource) -> Result<Vec<Utf8PathBuf>> {
        info!("Creating project {} at {}", self.package_name, self.absolute_path);
        let extension = templates.extension();
        let mut written = Vec::with_capacity(3);

        ensure_dir(&self.absolute_path, PROJECT_DIR_MODE)?;

        let context = context_from(TemplateKind::Main.as_str(), &self.view())?;

        let main_file = self.entry_file(extension);
        let main_body = templates.template(TemplateKind::Main)?;
        render_file(&main_file, TemplateKind::Main.as_str(), &main_body, &context)?;
        written.push(main_file);

        self.ensure_command_dir()?;

        let root_file = self.root_file(extension);
        let root_body = templates.template(TemplateKind::Root)?;
        render_file(&root_file, TemplateKind::Root.as_str(), &root_body, &context)?;
        written.push(root_file);

        written.push(self.create_license_file()?);
        Ok(written)
    }

    /// Render the license text into `LICENSE`; an empty text gives an empty file
    fn create_license_file(&self) -> Result<Utf8PathBuf> {
        let mut context = Context::new();
        context.insert("copyright", &self.copyright);

        let path = self.license_file();
        render_file(&path, "license", &self.license.text, &context)?;
        Ok(path)
    }
}
