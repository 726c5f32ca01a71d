//! `csgen init` creates a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration as TOML.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output
        .info("Initialising configuration...")
        .with_cli_context(|| "writing to stdout")?;

    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    if config_path.exists() && !args.force {
        output
            .warning(&format!(
                "Config already exists at {}  (use --force to overwrite)",
                config_path.display(),
            ))
            .with_cli_context(|| "writing to stdout")?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output
        .success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))
        .with_cli_context(|| "writing to stdout")?;

    Ok(())
}
