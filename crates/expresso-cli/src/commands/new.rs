//! Implementation of the `expresso new` command.
//!
//! Responsibility: resolve questionnaire answers from flags, config-file
//! defaults, and interactive prompts into a `ProjectConfig`, drive the core
//! composer and setup orchestrator, and display results.  No business logic
//! lives here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use tracing::{debug, info, instrument};

use expresso_adapters::{LocalFilesystem, ShellRunner};
use expresso_core::{
    application::{Filesystem, ProjectComposer, SetupOrchestrator, SetupPlan, SetupStep},
    domain::{ArtifactPlan, Database, DependencySet, Feature, ProjectConfig},
};

use crate::{
    cli::{DatabaseArg, NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompts,
};

/// Name used when `--yes` runs without a NAME argument, and offered as the
/// prompt default.
const DEFAULT_NAME: &str = "my-backend-project";

/// Execute the `expresso new` command.
///
/// Dispatch sequence:
/// 1. Resolve questionnaire answers (flags, then config file, then prompts)
/// 2. Refuse an existing target directory unless `--force`
/// 3. Early-exit if `--dry-run`
/// 4. Compose the project tree through the local filesystem
/// 5. Install dependencies and run schema setup unless `--skip-install`
/// 6. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve all answers into a validated config
    let project = resolve_config(&args, &config)?;
    debug!(config = %project, "Configuration resolved");

    // 2. Target directory pre-flight
    let parent = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let project_path = parent.join(project.name().as_str());
    if LocalFilesystem::new().exists(&project_path) && !args.force {
        return Err(CliError::ProjectExists { path: project_path });
    }

    let plan = ArtifactPlan::build(&project);
    let dependencies = DependencySet::resolve(&project);
    let setup = SetupPlan::for_config(&project);
    let skip_install = args.skip_install || config.defaults.skip_install;

    // 3. Dry run: describe, write nothing
    if args.dry_run {
        return describe_plan(
            &project,
            &project_path,
            &plan,
            &dependencies,
            &setup,
            skip_install,
            &output,
        );
    }

    show_configuration(&project, &project_path, &output)?;

    // 4. Compose the project tree
    compose_project(&project, &project_path, &output)?;

    // 5. Dependency installation and schema setup
    if skip_install {
        output.info("Skipping dependency installation (--skip-install)")?;
    } else {
        run_setup(&project, &project_path, &output)?;
    }

    // 6. Success + next steps
    output.success(&format!("Project '{}' created!", project.name()))?;

    if output.format() == OutputFormat::Json {
        // JSON goes straight to stdout so it stays parseable in pipes,
        // bypassing quiet-mode suppression: it *is* the output.
        let summary = render_json(
            &project,
            &project_path,
            &plan,
            &dependencies,
            &setup,
            skip_install,
            false,
        );
        println!("{}", to_pretty(&summary));
    } else if !global.quiet {
        print_next_steps(&project, skip_install, &output)?;
    }

    Ok(())
}

// ── Answer resolution ─────────────────────────────────────────────────────────

/// Resolve every questionnaire answer.
///
/// Precedence per answer: explicit flag, then the config-file default, then
/// an interactive prompt seeded with whatever default remains.  Under
/// `--yes` prompting is skipped and the default is taken as-is.
fn resolve_config(args: &NewArgs, config: &AppConfig) -> CliResult<ProjectConfig> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None if args.yes => DEFAULT_NAME.to_string(),
        None => prompts::project_name(DEFAULT_NAME)?,
    };

    let database = match args.database {
        Some(choice) => convert_database(choice),
        None => {
            let fallback = default_database(config);
            if args.yes {
                fallback
            } else {
                prompts::database(fallback)?
            }
        }
    };

    let mut builder = ProjectConfig::builder(name).database(database);
    for feature in Feature::ALL {
        let enabled = match feature_flag(args, feature) {
            Some(value) => value,
            None => {
                let fallback = default_feature(config, feature);
                if args.yes {
                    fallback
                } else {
                    prompts::feature(feature, fallback)?
                }
            }
        };
        builder = builder.feature(feature, enabled);
    }

    builder.build().map_err(|e| CliError::Core(e.into()))
}

/// Database default from the config file, tolerating unknown values.
fn default_database(config: &AppConfig) -> Database {
    config
        .defaults
        .database
        .as_deref()
        .map(Database::parse_or_default)
        .unwrap_or_default()
}

/// Feature default: config file first, then the capability registry.
fn default_feature(config: &AppConfig, feature: Feature) -> bool {
    let configured = match feature {
        Feature::ApiDocs => config.defaults.docs,
        Feature::SchemaValidation => config.defaults.validation,
        Feature::EmailTransport => config.defaults.email,
    };
    configured.unwrap_or_else(|| feature.default_enabled())
}

fn feature_flag(args: &NewArgs, feature: Feature) -> Option<bool> {
    match feature {
        Feature::ApiDocs => args.docs_flag(),
        Feature::SchemaValidation => args.validation_flag(),
        Feature::EmailTransport => args.email_flag(),
    }
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_database(arg: DatabaseArg) -> Database {
    match arg {
        DatabaseArg::MongoDb => Database::MongoDb,
        DatabaseArg::PostgreSql => Database::PostgreSql,
        DatabaseArg::MySql => Database::MySql,
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

fn compose_project(
    project: &ProjectConfig,
    project_path: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!("Creating '{}'...", project.name()))?;
    info!(project = %project.name(), path = %project_path.display(), "Composition started");

    let composer = ProjectComposer::new(Box::new(LocalFilesystem::new()));

    let spinner = progress_spinner(output, "Generating project structure...");
    let result = composer.compose_with(project_path, project, |phase| {
        if let Some(bar) = &spinner {
            bar.set_message(format!("Created {}", phase.label()));
        }
    });
    match (&spinner, &result) {
        (Some(bar), Ok(())) => bar.finish_with_message("Project structure generated"),
        (Some(bar), Err(_)) => bar.abandon_with_message("Generation failed"),
        (None, _) => {}
    }
    result.map_err(CliError::Core)?;

    info!(project = %project.name(), "Composition completed");
    if spinner.is_none() {
        output.success("Project structure generated")?;
    }
    Ok(())
}

fn run_setup(
    project: &ProjectConfig,
    project_path: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    output.header("Setting up dependencies...")?;
    info!(project = %project.name(), "Setup started");

    let orchestrator = SetupOrchestrator::new(Box::new(ShellRunner::new()));

    // Child-process output streams straight through, so per-step lines work
    // better than a spinner here.  Progress lines must not abort setup,
    // hence the ignored write results inside the callback.
    let mut running: Option<SetupStep> = None;
    let result = orchestrator.run_setup_with(project_path, project, |step| {
        if let Some(done) = running.take() {
            let _ = output.success(done.done_label());
        }
        let _ = output.step(step.label());
        running = Some(step);
    });

    match &result {
        Ok(()) => {
            if let Some(done) = running.take() {
                output.success(done.done_label())?;
            }
            info!(project = %project.name(), "Setup completed");
        }
        Err(_) => {
            if let Some(failed) = running.take() {
                output.error(&format!("{} failed", failed.label()))?;
            }
            output.warning("Setup interrupted; the generated files are intact")?;
        }
    }

    result.map_err(CliError::Core)
}

/// A steady-tick spinner, or `None` when the output mode cannot host one.
fn progress_spinner(output: &OutputManager, message: &'static str) -> Option<ProgressBar> {
    if output.is_quiet() || output.format() != OutputFormat::Human {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    project: &ProjectConfig,
    project_path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:     {}", project.name()))?;
    out.print(&format!("  Database:    {}", project.database().label()))?;
    out.print(&format!(
        "  Swagger:     {}",
        enabled_word(project.has(Feature::ApiDocs))
    ))?;
    out.print(&format!(
        "  Validation:  {}",
        enabled_word(project.has(Feature::SchemaValidation))
    ))?;
    out.print(&format!(
        "  Email:       {}",
        enabled_word(project.has(Feature::EmailTransport))
    ))?;
    out.print(&format!("  Location:    {}", project_path.display()))?;
    out.print("")?;
    Ok(())
}

const fn enabled_word(on: bool) -> &'static str {
    if on { "enabled" } else { "disabled" }
}

fn describe_plan(
    project: &ProjectConfig,
    project_path: &Path,
    plan: &ArtifactPlan,
    dependencies: &DependencySet,
    setup: &SetupPlan,
    skip_install: bool,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let value = render_json(
            project,
            project_path,
            plan,
            dependencies,
            setup,
            skip_install,
            true,
        );
        println!("{}", to_pretty(&value));
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        project.name(),
        project_path.display(),
    ))?;
    show_configuration(project, project_path, output)?;

    output.header("Folders")?;
    for folder in plan.folders() {
        output.print(&format!("  {folder}/"))?;
    }

    output.header("Files")?;
    for kind in plan.artifacts() {
        output.print(&format!("  {}", kind.path()))?;
    }

    output.header("Dependencies")?;
    output.print(&format!(
        "  production: {}",
        dependencies.production_install().join(", ")
    ))?;
    output.print(&format!(
        "  dev:        {}",
        dependencies.dev_install().join(", ")
    ))?;

    if skip_install {
        output.info("Setup commands skipped (--skip-install)")?;
    } else {
        output.header("Setup commands")?;
        for command in setup.commands() {
            output.print(&format!("  {command}"))?;
        }
    }

    Ok(())
}

fn print_next_steps(
    project: &ProjectConfig,
    skip_install: bool,
    out: &OutputManager,
) -> CliResult<()> {
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", project.name()))?;
    out.print("  cp .env.example .env   # then fill in your values")?;
    if skip_install {
        out.print("  npm install")?;
    }
    if project.database().is_relational() {
        out.print("  npx prisma migrate dev")?;
    }
    out.print("  npm run dev")?;
    Ok(())
}

// ── JSON rendering ────────────────────────────────────────────────────────────

fn render_json(
    project: &ProjectConfig,
    project_path: &Path,
    plan: &ArtifactPlan,
    dependencies: &DependencySet,
    setup: &SetupPlan,
    skip_install: bool,
    dry_run: bool,
) -> serde_json::Value {
    let features: serde_json::Map<String, serde_json::Value> = Feature::ALL
        .iter()
        .map(|f| {
            (
                f.as_str().to_string(),
                serde_json::Value::Bool(project.has(*f)),
            )
        })
        .collect();

    let setup_lines: Vec<String> = if skip_install {
        Vec::new()
    } else {
        setup.commands().iter().map(|c| c.to_string()).collect()
    };

    json!({
        "project": project.name().as_str(),
        "path": project_path.display().to_string(),
        "database": project.database().as_str(),
        "features": features,
        "folders": plan.folders(),
        "files": plan.artifacts().iter().map(|k| k.path()).collect::<Vec<_>>(),
        "dependencies": {
            "production": dependencies.production_install(),
            "dev": dependencies.dev_install(),
        },
        "setup": setup_lines,
        "dry_run": dry_run,
    })
}

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
