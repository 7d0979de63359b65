//! Shell command adapter using std::process.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use expresso_core::{application::ports::CommandRunner, error::ExpressoResult};

/// Production command runner using `std::process::Command`.
///
/// Child processes inherit stdio, so npm and npx output streams straight
/// to the user's terminal while the command runs.
#[derive(Debug, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> ExpressoResult<()> {
        let rendered = render_line(program, args);
        debug!(command = %rendered, cwd = %cwd.display(), "Spawning command");

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| map_spawn_error(&rendered, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(expresso_core::application::ApplicationError::CommandFailed {
                command: rendered,
                status: status.code(),
            }
            .into())
        }
    }
}

fn render_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

fn map_spawn_error(command: &str, e: io::Error) -> expresso_core::error::ExpressoError {
    use expresso_core::application::ApplicationError;

    ApplicationError::CommandLaunchFailed {
        command: command.to_string(),
        reason: e.to_string(),
    }
    .into()
}
