//! `cligen init` command handler

use anyhow::{Context, Result};
use camino::Utf8Path;
use cligen_core::{names, Command, LicenseCatalog, Project, ROOT_COMMAND};

use crate::cli::InitArgs;
use crate::output;

use super::{package_name, project_dir, resolve_settings};

/// Create a new application skeleton
pub fn run(args: InitArgs, config: Option<&Utf8Path>) -> Result<()> {
    let mut settings = resolve_settings(config, args.overrides)?;
    if args.use_config {
        settings.use_config = true;
    }

    let target = project_dir(args.path)?;
    let package_name = package_name(args.pkg_name.as_deref(), &target)?;

    // Validate every name before anything is written
    let commands = args
        .commands
        .iter()
        .map(|name| names::command_name(name))
        .collect::<cligen_core::Result<Vec<_>>>()?;

    let catalog = LicenseCatalog::embedded()?;
    let license = settings.resolve_license(&catalog)?;

    let mut project = Project::new(package_name, target, settings.copyright())
        .with_license(license)
        .with_use_config(settings.use_config)
        .with_command_subdirectory(settings.command_dir.clone());
    if let Some(app_name) = args.app_name {
        project = project.with_app_name(app_name);
    }

    output::header("Initialize Application");
    output::kv("Package", &project.package_name);
    output::kv("Location", project.absolute_path().as_str());
    output::kv("License", &project.license.name);
    println!();

    let templates = settings.template_source();
    let written = project
        .create(templates.as_ref())
        .with_context(|| format!("Failed to create project at {}", project.absolute_path()))?;
    for path in &written {
        output::info(&format!("Created {}", path));
    }

    for name in &commands {
        let path = Command::new(name.as_str(), ROOT_COMMAND, &project)
            .create(templates.as_ref())
            .with_context(|| format!("Failed to add command '{}'", name))?;
        output::info(&format!("Created {}", path));
    }

    println!();
    output::success(&format!(
        "Application '{}' created at {}",
        project.app_name,
        project.absolute_path()
    ));
    if project.license.text.is_empty() {
        output::warning("No license selected; LICENSE is empty");
    }
    Ok(())
}
