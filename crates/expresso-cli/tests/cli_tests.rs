//! End-to-end tests that exercise the compiled `expresso` binary.
//!
//! Every scaffolding invocation passes `--skip-install` so no test ever
//! shells out to npm.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expresso() -> Command {
    Command::cargo_bin("expresso").unwrap()
}

/// Flag-complete `new` invocation: answers every question, skips install.
fn scaffold_args(name: &str, database: &str) -> Vec<String> {
    [
        "new",
        name,
        "--database",
        database,
        "--docs",
        "--validation",
        "--no-email",
        "--yes",
        "--skip-install",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// ── Global surface ────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    expresso()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("expresso"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version_flag() {
    expresso()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    expresso()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--database"))
        .stdout(predicate::str::contains("--skip-install"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();
    expresso()
        .current_dir(temp.path())
        .arg("-q")
        .arg("-v")
        .args(scaffold_args("conflicted", "mongodb"))
        .assert()
        .failure()
        .code(2);
}

// ── Scaffolding ───────────────────────────────────────────────────────────────

#[test]
fn test_scaffold_document_store_project() {
    let temp = TempDir::new().unwrap();
    expresso()
        .current_dir(temp.path())
        .args(scaffold_args("demo-api", "mongodb"))
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let root = temp.path().join("demo-api");
    for folder in [
        "src",
        "src/controllers",
        "src/routes",
        "src/middleware",
        "src/config",
        "src/services",
        "src/models",
        "src/utils",
    ] {
        assert!(root.join(folder).is_dir(), "missing folder {folder}");
    }
    for file in [
        ".env.example",
        ".gitignore",
        "README.md",
        "src/app.js",
        "src/config/db.js",
        "src/controllers/healthController.js",
        "src/routes/healthRoutes.js",
        "src/middleware/errorHandler.js",
        "src/middleware/auth.js",
        "src/config/swagger.js",
        "src/utils/validation.js",
        "src/models/User.js",
    ] {
        assert!(root.join(file).is_file(), "missing file {file}");
    }
    // Email was declined, so no mailer config.
    assert!(!root.join("src/config/nodemailer.js").exists());

    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("demo-api"));
}

#[test]
fn test_scaffold_relational_project() {
    let temp = TempDir::new().unwrap();
    expresso()
        .current_dir(temp.path())
        .args([
            "new",
            "shop-api",
            "--database",
            "postgresql",
            "--no-docs",
            "--no-validation",
            "--email",
            "--yes",
            "--skip-install",
        ])
        .assert()
        .success();

    let root = temp.path().join("shop-api");
    assert!(root.join("src/config/db.js").is_file());
    assert!(root.join("src/config/nodemailer.js").is_file());
    // Declined features leave no trace.
    assert!(!root.join("src/config/swagger.js").exists());
    assert!(!root.join("src/utils/validation.js").exists());
    // Relational projects model users through the schema, not a class file.
    assert!(!root.join("src/models/User.js").exists());
}

#[test]
fn test_database_alias_accepted() {
    let temp = TempDir::new().unwrap();
    expresso()
        .current_dir(temp.path())
        .args(scaffold_args("alias-api", "pg"))
        .assert()
        .success();

    assert!(temp.path().join("alias-api/src/app.js").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let mut args = scaffold_args("phantom", "mongodb");
    args.push("--dry-run".into());

    expresso()
        .current_dir(temp.path())
        .args(&args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("phantom").exists());
}

#[test]
fn test_existing_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();

    expresso()
        .current_dir(temp.path())
        .args(scaffold_args("taken", "mongodb"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_force_overwrites_existing_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();
    fs::write(temp.path().join("taken/stale.txt"), "old").unwrap();

    let mut args = scaffold_args("taken", "mongodb");
    args.push("--force".into());

    expresso()
        .current_dir(temp.path())
        .args(&args)
        .assert()
        .success();

    assert!(temp.path().join("taken/src/app.js").is_file());
}

#[test]
fn test_invalid_name_fails_fast() {
    let temp = TempDir::new().unwrap();
    expresso()
        .current_dir(temp.path())
        .args(scaffold_args("Bad_Name", "mongodb"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!temp.path().join("Bad_Name").exists());
}

#[test]
fn test_unknown_database_value_is_rejected() {
    expresso()
        .args(["new", "x", "--database", "oracle", "--yes", "--skip-install"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_path_flag_relocates_the_project() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("workspace");
    fs::create_dir(&target).unwrap();

    let mut args = scaffold_args("nested", "mongodb");
    args.push("--path".into());
    args.push(target.to_string_lossy().into_owned());

    expresso().current_dir(temp.path()).args(&args).assert().success();

    assert!(target.join("nested/src/app.js").is_file());
    assert!(!temp.path().join("nested").exists());
}

// ── Output modes ──────────────────────────────────────────────────────────────

#[test]
fn test_quiet_scaffold_has_empty_stdout() {
    let temp = TempDir::new().unwrap();
    let mut args = scaffold_args("hushed", "mongodb");
    args.insert(0, "-q".into());

    expresso()
        .current_dir(temp.path())
        .args(&args)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("hushed/src/app.js").is_file());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();
    let mut args = scaffold_args("chatty", "mongodb");
    args.insert(0, "-v".into());

    expresso()
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .args(&args)
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn test_json_dry_run_is_parseable() {
    let temp = TempDir::new().unwrap();
    let assert = expresso()
        .current_dir(temp.path())
        .args([
            "new",
            "jdemo",
            "--database",
            "postgresql",
            "--no-docs",
            "--no-validation",
            "--no-email",
            "--yes",
            "--skip-install",
            "--dry-run",
            "--output-format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["project"], "jdemo");
    assert_eq!(value["database"], "postgresql");
    assert_eq!(value["dry_run"], true);
    assert!(value["setup"].as_array().unwrap().is_empty());
    let files = value["files"].as_array().unwrap();
    assert!(files.iter().all(|f| f != "src/config/swagger.js"));
    assert!(files.iter().any(|f| f == "src/config/db.js"));
}

#[test]
fn test_json_full_run_stdout_is_pure() {
    let temp = TempDir::new().unwrap();
    let mut args = scaffold_args("machine", "mongodb");
    args.push("--output-format".into());
    args.push("json".into());

    let assert = expresso()
        .current_dir(temp.path())
        .args(&args)
        .assert()
        .success();

    // The whole of stdout must be one JSON document.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["project"], "machine");
    assert_eq!(value["dry_run"], false);

    assert!(temp.path().join("machine/src/app.js").is_file());
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[test]
fn test_missing_explicit_config_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let mut args = scaffold_args("cfgless", "mongodb");
    args.push("--config".into());
    args.push(
        temp.path()
            .join("does-not-exist.toml")
            .to_string_lossy()
            .into_owned(),
    );

    expresso()
        .current_dir(temp.path())
        .args(&args)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_config_file_database_default_applies() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("expresso.toml");
    fs::write(&cfg, "[defaults]\ndatabase = \"mysql\"\n").unwrap();

    let assert = expresso()
        .current_dir(temp.path())
        .args([
            "new",
            "preset",
            "--yes",
            "--skip-install",
            "--dry-run",
            "--output-format",
            "json",
            "--config",
        ])
        .arg(&cfg)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["database"], "mysql");
    // Relational default: no document model in the plan.
    let files = value["files"].as_array().unwrap();
    assert!(files.iter().all(|f| f != "src/models/User.js"));
}

#[test]
fn test_init_local_creates_config_file() {
    let temp = TempDir::new().unwrap();
    expresso()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let written = temp.path().join(".expresso.toml");
    assert!(written.is_file());
    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.contains("[defaults]"));
    assert!(contents.contains("[output]"));

    // A second run without --force leaves the file alone and still succeeds.
    expresso()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_set_then_get_roundtrip() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("cfg.toml");
    fs::write(&cfg, "").unwrap();

    expresso()
        .args(["config", "set", "defaults.database", "pg", "--config"])
        .arg(&cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("postgresql"));

    expresso()
        .args(["config", "get", "defaults.database", "--config"])
        .arg(&cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.database = postgresql"));
}

#[test]
fn test_config_get_unknown_key_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("cfg.toml");
    fs::write(&cfg, "").unwrap();

    expresso()
        .args(["config", "get", "bogus.key", "--config"])
        .arg(&cfg)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_list_shows_sections() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("cfg.toml");
    fs::write(&cfg, "[defaults]\nskip_install = true\n").unwrap();

    expresso()
        .args(["config", "list", "--config"])
        .arg(&cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("skip_install = true"));
}

// ── Completions ───────────────────────────────────────────────────────────────

#[test]
fn test_shell_completions_bash() {
    expresso()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_shell_completions_zsh() {
    expresso()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef expresso"));
}
