//! `mamba config` - inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(config)?)?;
        }

        ConfigCommands::Path => match AppConfig::config_path() {
            Some(path) => output.print(&path.display().to_string())?,
            None => output.warning("No global configuration directory on this platform")?,
        },
    }

    Ok(())
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Look up a dotted `section.key` in the TOML form of `config`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let table = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let (section, field) = key.split_once('.').ok_or_else(unknown)?;
    let value = table
        .get(section)
        .and_then(|s| s.get(field))
        .ok_or_else(unknown)?;

    Ok(match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
