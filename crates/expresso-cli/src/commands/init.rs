//! `expresso init`: create a default configuration file.

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default Expresso configuration file.
///
/// `--local` targets `.expresso.toml` in the current directory; the default
/// (or `--global`) targets the platform config directory.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = if args.local_scope() {
        AppConfig::local_path()
    } else {
        AppConfig::config_path()
    };

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let default_config = AppConfig::default();
    let toml = toml::to_string_pretty(&default_config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    // Ensure parent directory exists.
    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_scope_targets_working_directory_file() {
        let args = InitArgs {
            global: false,
            local: true,
            force: false,
        };
        assert!(args.local_scope());
        assert_eq!(AppConfig::local_path().to_str(), Some(".expresso.toml"));
    }

    #[test]
    fn default_scope_is_global() {
        let args = InitArgs {
            global: false,
            local: false,
            force: false,
        };
        assert!(!args.local_scope());
    }

    #[test]
    fn default_config_serialises_to_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[output]"));
    }
}
