//! Sub-command scaffold: one extra file in a project's command directory

use camino::Utf8PathBuf;
use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::files::render_file;
use crate::project::{Project, ProjectView};
use crate::render::context_from;
use crate::templates::{TemplateKind, TemplateSource};

/// Default parent of generated sub-commands
pub const ROOT_COMMAND: &str = "rootCmd";

/// In-memory model of one additional sub-command
#[derive(Debug, Clone, Default)]
pub struct Command<'a> {
    /// Command identifier; also the generated file's base name
    pub name: String,
    /// Identifier of the command this one is added to
    pub parent_name: String,
    /// Project the command belongs to
    pub project: Option<&'a Project>,
}

#[derive(Serialize)]
struct CommandView<'a> {
    name: &'a str,
    parent_name: &'a str,
    project: ProjectView<'a>,
}

impl<'a> Command<'a> {
    /// Create a command attached to `project`
    pub fn new(
        name: impl Into<String>,
        parent_name: impl Into<String>,
        project: &'a Project,
    ) -> Self {
        Self {
            name: name.into(),
            parent_name: parent_name.into(),
            project: Some(project),
        }
    }

    fn project(&self) -> Result<&'a Project> {
        self.project.ok_or_else(|| Error::missing_project(&self.name))
    }

    /// Path of the generated file for `extension`
    pub fn file_path(&self, extension: &str) -> Result<Utf8PathBuf> {
        Ok(self
            .project()?
            .command_dir()
            .join(format!("{}.{}", self.name, extension)))
    }

    /// Write the command file, overwriting any existing file of that name.
    ///
    /// Fails with [`Error::MissingProject`] before touching the filesystem when
    /// no project is attached.
    pub fn create(&self, templates: &dyn TemplateSource) -> Result<Utf8PathBuf> {
        let project = self.project()?;
        info!("Adding command {} (parent {})", self.name, self.parent_name);

        project.ensure_command_dir()?;

        let path = self.file_path(templates.extension())?;
        let view = CommandView {
            name: &self.name,
            parent_name: &self.parent_name,
            project: project.view(),
        };
        let context = context_from(TemplateKind::Command.as_str(), &view)?;
        let body = templates.template(TemplateKind::Command)?;
        render_file(&path, TemplateKind::Command.as_str(), &body, &context)?;
        Ok(path)
    }
}
