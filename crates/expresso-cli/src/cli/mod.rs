//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "expresso",
    bin_name = "expresso",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Express backend scaffolding made instant",
    long_about = "Expresso generates production-ready Express.js backend projects \
                  with your choice of database and optional features.",
    after_help = "EXAMPLES:\n\
        \x20 expresso new my-api --database mongodb --docs\n\
        \x20 expresso new shop-api --database postgresql --no-email --yes\n\
        \x20 expresso new --yes --skip-install\n\
        \x20 expresso completions bash > /usr/share/bash-completion/completions/expresso",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new Express backend project.
    #[command(
        visible_alias = "n",
        about = "Generate a new Express backend project",
        after_help = "EXAMPLES:\n\
            \x20 expresso new my-api                  # interactive questionnaire\n\
            \x20 expresso new my-api --database postgresql --yes\n\
            \x20 expresso new my-api --no-docs --email --dry-run"
    )]
    New(NewArgs),

    /// Initialise an Expresso configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 expresso init           # default location\n\
            \x20 expresso init --global  # global config\n\
            \x20 expresso init --local   # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 expresso completions bash > ~/.local/share/bash-completion/completions/expresso\n\
            \x20 expresso completions zsh  > ~/.zfunc/_expresso\n\
            \x20 expresso completions fish > ~/.config/fish/completions/expresso.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Expresso configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 expresso config get defaults.database\n\
            \x20 expresso config set defaults.database postgresql\n\
            \x20 expresso config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `expresso new`.
///
/// Every questionnaire answer has a flag; anything left unanswered is
/// prompted for interactively, or filled from defaults under `--yes`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Lowercase letters, digits, hyphens, and underscores.
    /// Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Database backend.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database backend"
    )]
    pub database: Option<DatabaseArg>,

    /// Include Swagger API documentation.
    #[arg(long = "docs", overrides_with = "no_docs", help = "Include Swagger documentation")]
    pub docs: bool,

    /// Exclude Swagger API documentation.
    #[arg(long = "no-docs", overrides_with = "docs", help = "Exclude Swagger documentation")]
    pub no_docs: bool,

    /// Include Zod request validation schemas.
    #[arg(
        long = "validation",
        overrides_with = "no_validation",
        help = "Include Zod validation"
    )]
    pub validation: bool,

    /// Exclude Zod request validation schemas.
    #[arg(
        long = "no-validation",
        overrides_with = "validation",
        help = "Exclude Zod validation"
    )]
    pub no_validation: bool,

    /// Include the Nodemailer email transport.
    #[arg(long = "email", overrides_with = "no_email", help = "Include Nodemailer email support")]
    pub email: bool,

    /// Exclude the Nodemailer email transport.
    #[arg(
        long = "no-email",
        overrides_with = "email",
        help = "Exclude Nodemailer email support"
    )]
    pub no_email: bool,

    /// Parent directory the project folder is created in.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub path: Option<PathBuf>,

    /// Skip all prompts; unanswered questions use their defaults.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip prompts and use defaults for unanswered questions"
    )]
    pub yes: bool,

    /// Generate into an existing directory.
    #[arg(long = "force", help = "Generate even if the target directory exists")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Generate files only; run no npm or prisma commands.
    #[arg(long = "skip-install", help = "Skip dependency installation and schema setup")]
    pub skip_install: bool,
}

impl NewArgs {
    /// The Swagger toggle, if either flag of the pair was passed.
    pub fn docs_flag(&self) -> Option<bool> {
        flag_pair(self.docs, self.no_docs)
    }

    /// The Zod validation toggle, if either flag of the pair was passed.
    pub fn validation_flag(&self) -> Option<bool> {
        flag_pair(self.validation, self.no_validation)
    }

    /// The Nodemailer toggle, if either flag of the pair was passed.
    pub fn email_flag(&self) -> Option<bool> {
        flag_pair(self.email, self.no_email)
    }
}

/// Collapse an enable/disable flag pair into one optional answer.
/// `overrides_with` guarantees at most one of the two is set.
fn flag_pair(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        (false, false) => None,
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `expresso init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", conflicts_with = "local", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.expresso.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

impl InitArgs {
    /// Target scope for the generated file.  Global is the default; clap
    /// rejects combining the two flags.
    pub fn local_scope(&self) -> bool {
        self.local && !self.global
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `expresso completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `expresso config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported database backends.
///
/// Kept separate from the core `Database` type so that flag spelling and
/// aliases stay a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatabaseArg {
    /// Also accepted as `mongo`.
    #[value(name = "mongodb", alias = "mongo")]
    MongoDb,
    /// Also accepted as `postgres` or `pg`.
    #[value(name = "postgresql", alias = "postgres", alias = "pg")]
    PostgreSql,
    #[value(name = "mysql")]
    MySql,
}

impl std::fmt::Display for DatabaseArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MongoDb => write!(f, "mongodb"),
            Self::PostgreSql => write!(f, "postgresql"),
            Self::MySql => write!(f, "mysql"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn database_display() {
        assert_eq!(DatabaseArg::MongoDb.to_string(), "mongodb");
        assert_eq!(DatabaseArg::PostgreSql.to_string(), "postgresql");
        assert_eq!(DatabaseArg::MySql.to_string(), "mysql");
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "expresso",
            "new",
            "my-api",
            "--database",
            "mongodb",
            "--docs",
            "--no-email",
        ]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn name_is_optional() {
        let cli = Cli::parse_from(["expresso", "new", "--yes"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.name, None);
            assert!(args.yes);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn database_aliases() {
        for (spelling, expected) in [
            ("mongo", DatabaseArg::MongoDb),
            ("postgres", DatabaseArg::PostgreSql),
            ("pg", DatabaseArg::PostgreSql),
            ("mysql", DatabaseArg::MySql),
        ] {
            let cli = Cli::parse_from(["expresso", "new", "test", "-d", spelling]);
            if let Commands::New(args) = cli.command {
                assert_eq!(args.database, Some(expected), "alias {spelling}");
            } else {
                panic!("expected New command");
            }
        }
    }

    #[test]
    fn toggle_pairs_resolve_to_optional_answers() {
        let parse = |extra: &[&str]| {
            let mut argv = vec!["expresso", "new", "test"];
            argv.extend_from_slice(extra);
            match Cli::parse_from(argv).command {
                Commands::New(args) => args,
                _ => panic!("expected New command"),
            }
        };

        assert_eq!(parse(&[]).docs_flag(), None);
        assert_eq!(parse(&["--docs"]).docs_flag(), Some(true));
        assert_eq!(parse(&["--no-docs"]).docs_flag(), Some(false));
        assert_eq!(parse(&["--validation"]).validation_flag(), Some(true));
        assert_eq!(parse(&["--no-email"]).email_flag(), Some(false));
        // The later flag of a pair wins.
        assert_eq!(parse(&["--docs", "--no-docs"]).docs_flag(), Some(false));
        assert_eq!(parse(&["--no-docs", "--docs"]).docs_flag(), Some(true));
    }

    #[test]
    fn unknown_database_is_rejected() {
        let result = Cli::try_parse_from(["expresso", "new", "test", "--database", "couchdb"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["expresso", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }
}
