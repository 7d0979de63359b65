//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `expresso-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: file operations for the composer
//!   - `CommandRunner`: external process execution for the setup orchestrator
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::path::Path;

use crate::error::ExpressoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `expresso_adapters::filesystem::LocalFilesystem` (production)
/// - `expresso_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` is idempotent; existing directories are not an error
/// - `write_file` replaces the full content; there is no append mode
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ExpressoResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ExpressoResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running external commands.
///
/// Implemented by:
/// - `expresso_adapters::process::ShellRunner` (production)
/// - `expresso_adapters::process::RecordingRunner` (testing)
///
/// ## Design Notes
///
/// - `run` blocks until the child exits; the orchestrator issues commands
///   strictly one after another
/// - Callers observe only success or failure; stdout/stderr pass through to
///   the user's terminal
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, using `cwd` as the working directory.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> ExpressoResult<()>;
}
