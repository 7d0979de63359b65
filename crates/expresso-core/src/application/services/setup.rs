//! Post-generation setup - dependency installation and schema tooling.
//!
//! Setup is planned as a pure value first ([`SetupPlan`]) and executed
//! second ([`SetupOrchestrator`]). The plan is a fixed command sequence:
//!
//! 1. `npm install <production packages>`
//! 2. `npm install --save-dev <dev packages>`
//! 3. `npx prisma init --datasource-provider <provider>` (relational only)
//! 4. `npx prisma generate` (relational only)
//!
//! Every command runs inside the freshly generated project directory. The
//! first failing command aborts the sequence; generated files are never
//! removed on failure.

use std::fmt;
use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::CommandRunner,
    domain::{DependencySet, ProjectConfig},
    error::ExpressoResult,
};

// ── Steps ─────────────────────────────────────────────────────────────────────

/// A stage of the setup sequence, used for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupStep {
    /// Installing production dependencies via npm.
    InstallProduction,
    /// Installing development dependencies via npm.
    InstallDev,
    /// Creating the Prisma schema and datasource configuration.
    SchemaInit,
    /// Generating the Prisma client from the schema.
    SchemaGenerate,
}

impl SetupStep {
    /// Progress label shown while the step runs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InstallProduction => "Installing production dependencies",
            Self::InstallDev => "Installing dev dependencies",
            Self::SchemaInit => "Initializing Prisma",
            Self::SchemaGenerate => "Generating Prisma client",
        }
    }

    /// Label shown once the step has finished.
    pub fn done_label(&self) -> &'static str {
        match self {
            Self::InstallProduction => "Production dependencies installed",
            Self::InstallDev => "Dev dependencies installed",
            Self::SchemaInit => "Prisma initialized",
            Self::SchemaGenerate => "Prisma client generated",
        }
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// One external command of the setup sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupCommand {
    step: SetupStep,
    program: &'static str,
    args: Vec<String>,
}

impl SetupCommand {
    /// The step this command belongs to.
    pub fn step(&self) -> SetupStep {
        self.step
    }

    /// Program name, e.g. `npm`.
    pub fn program(&self) -> &'static str {
        self.program
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for SetupCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// The ordered command sequence setup will execute.
///
/// Pure data. Building the plan never touches the system, which lets dry
/// runs print the exact commands without executing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    commands: Vec<SetupCommand>,
}

impl SetupPlan {
    /// Derive the command sequence for a configuration.
    pub fn for_config(config: &ProjectConfig) -> Self {
        let deps = DependencySet::resolve(config);

        let mut install = vec!["install".to_string()];
        install.extend(deps.production_install().iter().map(|p| p.to_string()));

        let mut install_dev = vec!["install".to_string(), "--save-dev".to_string()];
        install_dev.extend(deps.dev_install().iter().map(|p| p.to_string()));

        let mut commands = vec![
            SetupCommand {
                step: SetupStep::InstallProduction,
                program: "npm",
                args: install,
            },
            SetupCommand {
                step: SetupStep::InstallDev,
                program: "npm",
                args: install_dev,
            },
        ];

        if let Some(provider) = config.database().provider() {
            commands.push(SetupCommand {
                step: SetupStep::SchemaInit,
                program: "npx",
                args: vec![
                    "prisma".to_string(),
                    "init".to_string(),
                    "--datasource-provider".to_string(),
                    provider.to_string(),
                ],
            });
            commands.push(SetupCommand {
                step: SetupStep::SchemaGenerate,
                program: "npx",
                args: vec!["prisma".to_string(), "generate".to_string()],
            });
        }

        Self { commands }
    }

    /// The commands in execution order.
    pub fn commands(&self) -> &[SetupCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// ── Orchestrator ──────────────────────────────────────────────────────────────

/// Executes a [`SetupPlan`] through the `CommandRunner` port.
pub struct SetupOrchestrator {
    runner: Box<dyn CommandRunner>,
}

impl SetupOrchestrator {
    /// Create a new orchestrator with the given command runner adapter.
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Run the full setup sequence for `config` inside `project_dir`.
    pub fn run_setup(&self, project_dir: &Path, config: &ProjectConfig) -> ExpressoResult<()> {
        self.run_setup_with(project_dir, config, |_| {})
    }

    /// Run setup, invoking `on_step` as each step starts.
    ///
    /// Commands run sequentially; the first failure propagates and the
    /// remaining steps are skipped.
    #[instrument(
        skip_all,
        fields(project = %config.name(), database = %config.database())
    )]
    pub fn run_setup_with(
        &self,
        project_dir: &Path,
        config: &ProjectConfig,
        mut on_step: impl FnMut(SetupStep),
    ) -> ExpressoResult<()> {
        let plan = SetupPlan::for_config(config);
        info!(steps = plan.len(), "Setup plan built");

        for command in plan.commands() {
            on_step(command.step());
            info!(step = %command.step(), command = %command, "Running setup command");
            self.runner
                .run(command.program(), command.args(), project_dir)?;
        }

        info!("Setup completed successfully");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockCommandRunner;
    use crate::application::ApplicationError;
    use crate::domain::Database;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    fn config(database: Database) -> ProjectConfig {
        ProjectConfig::builder("demo-api")
            .database(database)
            .build()
            .unwrap()
    }

    // ── Plan shape ────────────────────────────────────────────────────────

    #[test]
    fn document_database_plans_only_the_installs() {
        let plan = SetupPlan::for_config(&config(Database::MongoDb));
        let steps: Vec<_> = plan.commands().iter().map(|c| c.step()).collect();
        assert_eq!(steps, vec![SetupStep::InstallProduction, SetupStep::InstallDev]);
    }

    #[test]
    fn relational_database_appends_schema_steps() {
        let plan = SetupPlan::for_config(&config(Database::PostgreSql));
        let steps: Vec<_> = plan.commands().iter().map(|c| c.step()).collect();
        assert_eq!(
            steps,
            vec![
                SetupStep::InstallProduction,
                SetupStep::InstallDev,
                SetupStep::SchemaInit,
                SetupStep::SchemaGenerate,
            ]
        );

        let init = &plan.commands()[2];
        assert_eq!(init.program(), "npx");
        assert_eq!(
            init.args(),
            ["prisma", "init", "--datasource-provider", "postgresql"]
        );
    }

    #[test]
    fn mysql_uses_its_own_datasource_provider() {
        let plan = SetupPlan::for_config(&config(Database::MySql));
        assert!(
            plan.commands()
                .iter()
                .any(|c| c.args().contains(&"mysql".to_string()))
        );
    }

    #[test]
    fn install_commands_carry_the_resolved_packages() {
        let cfg = config(Database::MongoDb);
        let plan = SetupPlan::for_config(&cfg);

        let install = &plan.commands()[0];
        assert_eq!(install.program(), "npm");
        assert_eq!(install.args()[0], "install");
        assert!(install.args().contains(&"express".to_string()));
        assert!(install.args().contains(&"mongoose".to_string()));

        let dev = &plan.commands()[1];
        assert_eq!(&dev.args()[..2], ["install", "--save-dev"]);
        assert!(dev.args().contains(&"nodemon".to_string()));
    }

    #[test]
    fn command_display_reads_like_a_shell_line() {
        let plan = SetupPlan::for_config(&config(Database::PostgreSql));
        let rendered = plan.commands()[2].to_string();
        assert_eq!(rendered, "npx prisma init --datasource-provider postgresql");
    }

    // ── Execution ─────────────────────────────────────────────────────────

    #[test]
    fn runs_every_command_in_the_project_directory() {
        let calls: Arc<Mutex<Vec<(String, Vec<String>, PathBuf)>>> =
            Arc::new(Mutex::new(Vec::new()));
        let recorded = calls.clone();

        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(move |program, args, cwd| {
            recorded
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec(), cwd.to_path_buf()));
            Ok(())
        });

        let orchestrator = SetupOrchestrator::new(Box::new(runner));
        orchestrator
            .run_setup(Path::new("/out/demo-api"), &config(Database::MySql))
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|(_, _, cwd)| cwd == Path::new("/out/demo-api")));
        assert_eq!(calls[0].0, "npm");
        assert_eq!(calls[3].1, ["prisma", "generate"]);
    }

    #[test]
    fn step_callback_fires_when_each_step_starts() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_, _, _| Ok(()));

        let orchestrator = SetupOrchestrator::new(Box::new(runner));
        let mut steps = Vec::new();
        orchestrator
            .run_setup_with(Path::new("/out/x"), &config(Database::MongoDb), |step| {
                steps.push(step)
            })
            .unwrap();

        assert_eq!(steps, vec![SetupStep::InstallProduction, SetupStep::InstallDev]);
    }

    #[test]
    fn first_failure_skips_the_remaining_steps() {
        let mut runner = MockCommandRunner::new();
        // Production install fails; no further command may run.
        runner.expect_run().times(1).returning(|program, args, _| {
            Err(ApplicationError::CommandFailed {
                command: format!("{program} {}", args.join(" ")),
                status: Some(1),
            }
            .into())
        });

        let orchestrator = SetupOrchestrator::new(Box::new(runner));
        let mut steps = Vec::new();
        let result = orchestrator.run_setup_with(
            Path::new("/out/x"),
            &config(Database::PostgreSql),
            |step| steps.push(step),
        );

        assert!(result.is_err());
        assert_eq!(steps, vec![SetupStep::InstallProduction]);
    }
}
