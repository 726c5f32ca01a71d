//! `csgen config` reads configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)
        }

        ConfigCommands::List => {
            output
                .header("Current Configuration:")
                .with_cli_context(|| "writing to stdout")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(serialised.trim_end())
        }

        ConfigCommands::Path => output.print(&AppConfig::config_path().display().to_string()),
    }
    .with_cli_context(|| "writing to stdout")
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let paths = &config.paths;
    match key {
        "paths.base_dir" => Ok(paths
            .base_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "paths.output_dir" => Ok(paths.output_dir.display().to_string()),
        "paths.templates_dir" => Ok(paths.templates_dir.display().to_string()),
        "paths.manifest" => Ok(paths.manifest.display().to_string()),
        "manifest.insertion_path" => Ok(config.manifest.insertion_path.clone()),
        "manifest.writer.indent" => Ok(config.manifest.writer.indent.to_string()),
        "manifest.writer.crlf" => Ok(config.manifest.writer.crlf.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "paths.manifest").unwrap(), "Puzzle.csproj");
        assert_eq!(
            get_config_value(&cfg, "manifest.insertion_path").unwrap(),
            "VisualStudioProject/CSHARP/Files/Include"
        );
    }

    #[test]
    fn unset_base_dir_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "paths.base_dir").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
