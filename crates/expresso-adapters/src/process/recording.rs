//! Recording command runner for testing.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use expresso_core::{application::ports::CommandRunner, error::ExpressoResult};

/// One command the runner was asked to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl RecordedCommand {
    /// The command as a single shell-like line.
    pub fn line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// In-memory command runner for testing.
///
/// Records every command instead of executing it. Optionally fails any
/// command whose rendered line contains a configured needle, to exercise
/// failure paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    commands: Vec<RecordedCommand>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that fails any command whose line contains `needle`.
    pub fn failing_on(needle: impl Into<String>) -> Self {
        let runner = Self::new();
        runner.inner.lock().unwrap().fail_on = Some(needle.into());
        runner
    }

    /// Commands recorded so far, in execution order (testing helper).
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.inner.lock().unwrap().commands.clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> ExpressoResult<()> {
        let recorded = RecordedCommand {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        };
        let line = recorded.line();

        let mut inner = self.inner.lock().map_err(|_| {
            expresso_core::application::ApplicationError::CommandLaunchFailed {
                command: line.clone(),
                reason: "Runner lock poisoned".into(),
            }
        })?;
        inner.commands.push(recorded);

        match &inner.fail_on {
            Some(needle) if line.contains(needle.as_str()) => {
                Err(expresso_core::application::ApplicationError::CommandFailed {
                    command: line,
                    status: Some(1),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn records_commands_in_order() {
        let runner = RecordingRunner::new();
        runner
            .run("npm", &args(&["install"]), Path::new("/proj"))
            .unwrap();
        runner
            .run("npx", &args(&["prisma", "generate"]), Path::new("/proj"))
            .unwrap();

        let commands = runner.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].line(), "npm install");
        assert_eq!(commands[1].line(), "npx prisma generate");
        assert_eq!(commands[1].cwd, PathBuf::from("/proj"));
    }

    #[test]
    fn failure_needle_rejects_matching_command_but_still_records_it() {
        let runner = RecordingRunner::failing_on("prisma");
        runner
            .run("npm", &args(&["install"]), Path::new("/proj"))
            .unwrap();
        let result = runner.run("npx", &args(&["prisma", "init"]), Path::new("/proj"));

        assert!(result.is_err());
        assert_eq!(runner.commands().len(), 2);
    }
}
