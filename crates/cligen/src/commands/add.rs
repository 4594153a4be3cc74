//! `cligen add` command handler

use anyhow::{Context, Result};
use camino::Utf8Path;
use cligen_core::{names, Command, LicenseCatalog, Project};

use crate::cli::AddArgs;
use crate::output;

use super::{package_name, project_dir, resolve_settings};

/// Add a sub-command to an existing application
pub fn run(args: AddArgs, config: Option<&Utf8Path>) -> Result<()> {
    let name = names::command_name(&args.name)?;
    let settings = resolve_settings(config, args.overrides)?;

    let target = project_dir(args.path)?;
    let package_name = package_name(args.pkg_name.as_deref(), &target)?;
    let license = settings.resolve_license(&LicenseCatalog::embedded()?)?;

    let mut project = Project::new(package_name, target, settings.copyright())
        .with_license(license)
        .with_use_config(settings.use_config)
        .with_command_subdirectory(settings.command_dir.clone());
    if let Some(app_name) = args.app_name {
        project = project.with_app_name(app_name);
    }

    let templates = settings.template_source();
    let path = Command::new(name.as_str(), args.parent.as_str(), &project)
        .create(templates.as_ref())
        .with_context(|| format!("Failed to add command '{}'", name))?;

    output::success(&format!("{} created at {}", name, path));
    Ok(())
}
