//! Interactive questionnaire for unanswered `expresso new` options.
//!
//! Compiled only with the `interactive` feature (on by default).  Without
//! it, every prompt resolves to `CliError::FeatureNotAvailable`, so fully
//! flag-driven invocations keep working in minimal builds.
//!
//! Question wording and defaults come from the capability registry in
//! `expresso-core`; this module owns only the terminal interaction.

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    use expresso_core::domain::{Database, Feature};

    use crate::error::{CliError, CliResult};

    /// Ask for a project name.
    ///
    /// Input is trimmed and lowercased *before* validation, so `My-API`
    /// is accepted and becomes `my-api`.  Strict validation of flag input
    /// stays with the core builder; leniency is a prompt-only behaviour.
    pub fn project_name(default: &str) -> CliResult<String> {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("What is your project name?")
            .default(default.to_string())
            .validate_with(|input: &String| -> Result<(), &'static str> { validate_name(input) })
            .interact_text()
            .map_err(map_dialoguer)?;

        Ok(normalize_name(&name))
    }

    /// Ask which database backend to use.
    pub fn database(default: Database) -> CliResult<Database> {
        let labels: Vec<String> = Database::ALL
            .iter()
            .map(|db| format!("{} {}", emoji(*db), db.label()))
            .collect();
        let initial = Database::ALL
            .iter()
            .position(|db| *db == default)
            .unwrap_or(0);

        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Which database do you want to use?")
            .items(&labels)
            .default(initial)
            .interact()
            .map_err(map_dialoguer)?;

        Ok(Database::ALL[index])
    }

    /// Ask one feature toggle question, worded by the capability registry.
    pub fn feature(feature: Feature, default: bool) -> CliResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(feature.prompt())
            .default(default)
            .interact()
            .map_err(map_dialoguer)
    }

    fn normalize_name(input: &str) -> String {
        input.trim().to_lowercase()
    }

    fn validate_name(input: &str) -> Result<(), &'static str> {
        let candidate = normalize_name(input);
        if candidate.is_empty() {
            return Err("Project name cannot be empty");
        }
        if !candidate
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(
                "Project name can only contain lowercase letters, numbers, hyphens, and underscores",
            );
        }
        Ok(())
    }

    const fn emoji(database: Database) -> &'static str {
        match database {
            Database::MongoDb => "\u{1f4e6}",    // 📦
            Database::PostgreSql => "\u{1f418}", // 🐘
            Database::MySql => "\u{1f42c}",      // 🐬
        }
    }

    /// Ctrl-C surfaces as an interrupted read; everything else is a real
    /// terminal failure.
    fn map_dialoguer(err: dialoguer::Error) -> CliError {
        let dialoguer::Error::IO(io_err) = err;
        if io_err.kind() == std::io::ErrorKind::Interrupted {
            CliError::Cancelled
        } else {
            CliError::IoError {
                message: "Prompt failed".into(),
                source: io_err,
            }
        }
    }

}

#[cfg(feature = "interactive")]
pub use interactive::{database, feature, project_name};

#[cfg(not(feature = "interactive"))]
mod fallback {
    use expresso_core::domain::{Database, Feature};

    use crate::error::{CliError, CliResult};

    pub fn project_name(_default: &str) -> CliResult<String> {
        Err(unavailable())
    }

    pub fn database(_default: Database) -> CliResult<Database> {
        Err(unavailable())
    }

    pub fn feature(_feature: Feature, _default: bool) -> CliResult<bool> {
        Err(unavailable())
    }

    fn unavailable() -> CliError {
        CliError::FeatureNotAvailable {
            feature: "interactive",
        }
    }
}

#[cfg(not(feature = "interactive"))]
pub use fallback::{database, feature, project_name};
