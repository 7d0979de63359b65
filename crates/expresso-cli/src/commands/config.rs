//! `expresso config`: read and write configuration values.

use std::str::FromStr;

use expresso_core::domain::Database;

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `Set` persists to the file named by `--config` when given, otherwise the
/// global config location.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    mut config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let stored = set_config_value(&mut config, &key, &value)?;
            let path = global.config.clone().unwrap_or_else(AppConfig::config_path);

            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_cli_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }
            std::fs::write(&path, &serialised)
                .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

            output.success(&format!("Set {key} = {stored}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = global.config.clone().unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.database" => Ok(config
            .defaults
            .database
            .clone()
            .unwrap_or_else(|| "unset".into())),
        "defaults.docs" => Ok(display_toggle(config.defaults.docs)),
        "defaults.validation" => Ok(display_toggle(config.defaults.validation)),
        "defaults.email" => Ok(display_toggle(config.defaults.email)),
        "defaults.skip_install" => Ok(config.defaults.skip_install.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(unknown_key(key)),
    }
}

/// Validate and apply one key, returning the canonical stored value.
fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<String> {
    match key {
        "defaults.database" => {
            let database = Database::from_str(value).map_err(|_| CliError::ConfigError {
                message: format!(
                    "Unknown database '{value}' (expected one of: {})",
                    Database::ALL
                        .iter()
                        .map(|d| d.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                source: None,
            })?;
            config.defaults.database = Some(database.as_str().to_string());
            Ok(database.as_str().to_string())
        }
        "defaults.docs" => {
            let parsed = parse_bool(key, value)?;
            config.defaults.docs = Some(parsed);
            Ok(parsed.to_string())
        }
        "defaults.validation" => {
            let parsed = parse_bool(key, value)?;
            config.defaults.validation = Some(parsed);
            Ok(parsed.to_string())
        }
        "defaults.email" => {
            let parsed = parse_bool(key, value)?;
            config.defaults.email = Some(parsed);
            Ok(parsed.to_string())
        }
        "defaults.skip_install" => {
            let parsed = parse_bool(key, value)?;
            config.defaults.skip_install = parsed;
            Ok(parsed.to_string())
        }
        "output.no_color" => {
            let parsed = parse_bool(key, value)?;
            config.output.no_color = parsed;
            Ok(parsed.to_string())
        }
        "output.format" => {
            let normalised = value.to_ascii_lowercase();
            if !matches!(normalised.as_str(), "auto" | "human" | "plain" | "json") {
                return Err(CliError::ConfigError {
                    message: format!(
                        "Invalid format '{value}' (expected one of: auto, human, plain, json)"
                    ),
                    source: None,
                });
            }
            config.output.format = normalised.clone();
            Ok(normalised)
        }
        _ => Err(unknown_key(key)),
    }
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    value.parse::<bool>().map_err(|_| CliError::ConfigError {
        message: format!("Invalid value '{value}' for '{key}' (expected true or false)"),
        source: None,
    })
}

fn display_toggle(value: Option<bool>) -> String {
    value.map_or_else(|| "unset".into(), |v| v.to_string())
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known keys: defaults.database, defaults.docs, \
             defaults.validation, defaults.email, defaults.skip_install, output.no_color, \
             output.format)"
        ),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
