//! Subcommand handlers.  One module per subcommand; each exposes a single
//! `execute` function called from the dispatcher in `main.rs`.

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
