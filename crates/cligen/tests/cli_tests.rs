//! Integration tests for the cligen binary
//!
//! Each test runs the compiled binary against a scratch directory with `HOME`
//! pointed at a temporary directory so no user settings leak in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "CLIGEN_AUTHOR",
    "CLIGEN_LICENSE",
    "CLIGEN_USE_CONFIG",
    "CLIGEN_YEAR",
    "CLIGEN_COMMAND_DIR",
    "CLIGEN_TEMPLATES_DIR",
];

// ─── Helpers ───────────────────────────────────────────────────────────────

fn cligen(home: &Path, cwd: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cligen"));
    cmd.args(args).current_dir(cwd).env("HOME", home);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("CLIGEN_YEAR", "2024");
    cmd.output().expect("failed to run cligen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn count_files(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .map(|p| if p.is_dir() { count_files(&p) } else { 1 })
        .sum()
}

// ─── init ──────────────────────────────────────────────────────────────────

#[test]
fn test_init_creates_skeleton() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let output = cligen(
        home.path(),
        work.path(),
        &[
            "init",
            "demo",
            "--pkg-name",
            "github.com/acme/demo",
            "--license",
            "mit",
            "--author",
            "Acme Corp",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let root = work.path().join("demo");
    let main = fs::read_to_string(root.join("main.go")).unwrap();
    assert!(main.contains("package main"));
    assert!(main.contains("import \"github.com/acme/demo/cmd\""));
    assert!(main.contains("Copyright © 2024 Acme Corp"));

    let root_cmd = fs::read_to_string(root.join("cmd/root.go")).unwrap();
    assert!(root_cmd.contains("package cmd"));
    assert!(root_cmd.contains("MIT license"));

    let license = fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.starts_with("The MIT License (MIT)"));
    assert!(license.contains("Copyright © 2024 Acme Corp"));

    assert!(stdout(&output).contains("Application 'demo' created"));
}

#[test]
fn test_init_with_commands() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let output = cligen(
        home.path(),
        work.path(),
        &["init", "tool", "--command", "serve", "--command", "migrate-db"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let cmd_dir = work.path().join("tool/cmd");
    let serve = fs::read_to_string(cmd_dir.join("serve.go")).unwrap();
    assert!(serve.contains("rootCmd.AddCommand(serveCmd)"));
    assert!(cmd_dir.join("migrateDb.go").is_file());
}

#[test]
fn test_init_without_command_dir() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let output = cligen(home.path(), work.path(), &["init", "flat", "--cmd-dir", "main"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let root = work.path().join("flat");
    assert!(root.join("main.go").is_file());
    assert!(root.join("root.go").is_file());
    assert!(!root.join("cmd").exists());
}

#[test]
fn test_init_invalid_command_name_writes_nothing() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let output = cligen(
        home.path(),
        work.path(),
        &["init", "demo", "--command", "9lives"],
    );
    assert!(!output.status.success());
    assert!(!work.path().join("demo").exists());
}

#[test]
fn test_init_unknown_license_fails() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let output = cligen(home.path(), work.path(), &["init", "demo", "--license", "wtfpl"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("wtfpl"));
    assert_eq!(count_files(work.path()), 0);
}

#[test]
fn test_init_reads_settings_file() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(
        home.path().join(".cligen.yaml"),
        "author: Settings Author\nlicense: ISC\nuse-config: true\n",
    )
    .unwrap();

    let output = cligen(home.path(), work.path(), &["init", "demo"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let root = work.path().join("demo");
    let license = fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.contains("Copyright © 2024 Settings Author"));
    let root_cmd = fs::read_to_string(root.join("cmd/root.go")).unwrap();
    assert!(root_cmd.contains("initConfig"));
}

#[test]
fn test_init_explicit_config_flag() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let config = work.path().join("cligen.yaml");
    fs::write(&config, "command-dir: commands\n").unwrap();

    let output = cligen(
        home.path(),
        work.path(),
        &["--config", config.to_str().unwrap(), "init", "demo"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(work.path().join("demo/commands/root.go").is_file());
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let output = cligen(
        home.path(),
        work.path(),
        &["--config", "/nonexistent/cligen.yaml", "init", "demo"],
    );
    assert!(!output.status.success());
    assert!(!work.path().join("demo").exists());
}

// ─── add ───────────────────────────────────────────────────────────────────

#[test]
fn test_add_command_to_existing_project() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let init = cligen(home.path(), work.path(), &["init", "demo"]);
    assert!(init.status.success(), "stderr: {}", stderr(&init));

    let project = work.path().join("demo");
    let output = cligen(home.path(), &project, &["add", "config"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let config = fs::read_to_string(project.join("cmd/config.go")).unwrap();
    assert!(config.contains("rootCmd.AddCommand(configCmd)"));

    let output = cligen(
        home.path(),
        &project,
        &["add", "create-user", "--parent", "configCmd"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let create = fs::read_to_string(project.join("cmd/createUser.go")).unwrap();
    assert!(create.contains("configCmd.AddCommand(createUserCmd)"));
}

#[test]
fn test_add_keeps_app_name_from_init() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let init = cligen(home.path(), work.path(), &["init", "demo", "--app-name", "mytool"]);
    assert!(init.status.success(), "stderr: {}", stderr(&init));
    let root_cmd = fs::read_to_string(work.path().join("demo/cmd/root.go")).unwrap();
    assert!(root_cmd.contains("Use:   \"mytool\""));

    let output = cligen(
        home.path(),
        work.path(),
        &["add", "serve", "--path", "demo", "--app-name", "mytool"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let serve = fs::read_to_string(work.path().join("demo/cmd/serve.go")).unwrap();
    assert!(serve.contains("mytool serve runs the serve action"));
    assert!(!serve.contains("demo serve"));
}

#[test]
fn test_add_with_path_creates_command_dir() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::create_dir(work.path().join("bare")).unwrap();

    let output = cligen(home.path(), work.path(), &["add", "serve", "--path", "bare"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(work.path().join("bare/cmd/serve.go").is_file());
    assert_eq!(count_files(&work.path().join("bare")), 1);
}

#[test]
fn test_add_invalid_name_fails() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let output = cligen(home.path(), work.path(), &["add", "bad name"]);
    assert!(!output.status.success());
    assert_eq!(count_files(work.path()), 0);
}

// ─── licenses / settings ──────────────────────────────────────────────────

#[test]
fn test_licenses_lists_catalog() {
    let home = TempDir::new().unwrap();

    let output = cligen(home.path(), home.path(), &["licenses"]);
    assert!(output.status.success());
    let out = stdout(&output);
    for name in ["none", "MIT", "BSD-2-Clause", "BSD-3-Clause", "ISC", "Apache-2.0"] {
        assert!(out.contains(name), "missing {} in {}", name, out);
    }
}

#[test]
fn test_settings_shows_resolved_values() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".cligen.yaml"), "license: MIT\n").unwrap();

    let output = cligen(home.path(), home.path(), &["settings"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("license: MIT"));
    assert!(out.contains("year: 2024"));
    assert!(out.contains("command-dir: cmd"));
}
