//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use cligen_core::{Settings, ROOT_COMMAND};

/// cligen - scaffold command-line applications
#[derive(Parser, Debug)]
#[command(name = "cligen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file (default: ~/.cligen.yaml)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new application skeleton
    Init(InitArgs),

    /// Add a sub-command to an existing application
    Add(AddArgs),

    /// List available licenses
    Licenses,

    /// Show resolved settings
    Settings,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    pub path: Option<Utf8PathBuf>,

    /// Package / module name (default: directory name)
    #[arg(long)]
    pub pkg_name: Option<String>,

    /// Name used in generated help text (default: last segment of the package name)
    #[arg(long)]
    pub app_name: Option<String>,

    /// Generate configuration-file support
    #[arg(long)]
    pub use_config: bool,

    /// Sub-command to generate alongside the root command (repeatable)
    #[arg(long = "command", value_name = "NAME")]
    pub commands: Vec<String>,

    #[command(flatten)]
    pub overrides: SettingsArgs,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Command name; dashed or underscored names become camelCase
    pub name: String,

    /// Variable name of the parent command
    #[arg(short, long, default_value = ROOT_COMMAND)]
    pub parent: String,

    /// Project directory (default: current directory)
    #[arg(long)]
    pub path: Option<Utf8PathBuf>,

    /// Package / module name (default: directory name)
    #[arg(long)]
    pub pkg_name: Option<String>,

    /// Name used in generated help text; should match the one given to `init`
    #[arg(long)]
    pub app_name: Option<String>,

    #[command(flatten)]
    pub overrides: SettingsArgs,
}

/// Flags that override settings from file and environment
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Author name for the copyright line
    #[arg(short, long)]
    pub author: Option<String>,

    /// License name (see `cligen licenses`)
    #[arg(short, long)]
    pub license: Option<String>,

    /// Command directory relative to the project root; `main` for none
    #[arg(long)]
    pub cmd_dir: Option<String>,

    /// Directory with main.tera, root.tera and command.tera
    #[arg(long)]
    pub templates_dir: Option<Utf8PathBuf>,

    /// Source extension for --templates-dir templates
    #[arg(long, requires = "templates_dir")]
    pub extension: Option<String>,
}

impl SettingsArgs {
    /// Apply flag values on top of `settings`
    pub fn apply(self, settings: &mut Settings) {
        if let Some(author) = self.author {
            settings.author = author;
        }
        if let Some(license) = self.license {
            settings.license = license;
            settings.license_text = None;
            settings.license_header = None;
        }
        if let Some(cmd_dir) = self.cmd_dir {
            settings.command_dir = cmd_dir;
        }
        if self.templates_dir.is_some() {
            settings.templates_dir = self.templates_dir;
        }
        if self.extension.is_some() {
            settings.extension = self.extension;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from([
            "cligen",
            "init",
            "demo",
            "--pkg-name",
            "github.com/acme/demo",
            "--license",
            "MIT",
            "--command",
            "serve",
            "--command",
            "migrate-db",
            "--use-config",
        ]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.path.as_deref(), Some(camino::Utf8Path::new("demo")));
                assert_eq!(args.pkg_name.as_deref(), Some("github.com/acme/demo"));
                assert_eq!(args.commands, vec!["serve", "migrate-db"]);
                assert!(args.use_config);
                assert_eq!(args.overrides.license.as_deref(), Some("MIT"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_defaults_parent() {
        let cli = Cli::parse_from(["cligen", "add", "serve"]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.name, "serve");
                assert_eq!(args.parent, ROOT_COMMAND);
                assert!(args.app_name.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_license_flag_drops_custom_text() {
        let mut settings = Settings {
            license_text: Some("custom".to_string()),
            ..Default::default()
        };
        SettingsArgs {
            license: Some("MIT".to_string()),
            ..Default::default()
        }
        .apply(&mut settings);
        assert_eq!(settings.license, "MIT");
        assert!(settings.license_text.is_none());
    }
}
