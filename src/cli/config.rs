//! Configuration CLI command handlers

use std::path::Path;

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::{unit_suffix_problem, Config, GroupSeparator};
use crate::error::{PointsError, Result};

/// Handle configuration commands against the file at `path`
pub fn handle_config(command: ConfigCommand, path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, &value, path),
        ConfigCommand::Get { key } => handle_get(key, path),
        ConfigCommand::Remove { key } => handle_remove(key, path),
    }
}

/// Apply `value` for `key` to `config`
pub fn apply(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::UnitSuffix => {
            if let Some(problem) = unit_suffix_problem(value, config.group_separator) {
                return Err(PointsError::InvalidInput(problem));
            }
            config.unit_suffix = value.to_string();
        }
        ConfigKey::Separator => {
            let separator = GroupSeparator::from_str(value).ok_or_else(|| {
                PointsError::InvalidInput(format!(
                    "Invalid separator '{}'. Available separators: {}",
                    value,
                    GroupSeparator::all()
                        .iter()
                        .map(|s| s.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?;
            if let Some(problem) = unit_suffix_problem(&config.unit_suffix, separator) {
                return Err(PointsError::InvalidInput(problem));
            }
            config.group_separator = separator;
        }
        ConfigKey::Placeholder => {
            if value.trim().is_empty() {
                return Err(PointsError::InvalidInput(
                    "Placeholder cannot be empty.".into(),
                ));
            }
            config.placeholder = value.to_string();
        }
        ConfigKey::Balance => {
            config.balance = value.parse().map_err(|_| {
                PointsError::InvalidInput(format!(
                    "Invalid balance '{}'. Use a whole number of points.",
                    value
                ))
            })?;
        }
        ConfigKey::Account => {
            config.account = value.to_string();
        }
    }
    Ok(())
}

/// Current value of `key` as text
pub fn describe(config: &Config, key: ConfigKey) -> String {
    match key {
        ConfigKey::UnitSuffix => config.unit_suffix.clone(),
        ConfigKey::Separator => config.group_separator.to_string(),
        ConfigKey::Placeholder => config.placeholder.clone(),
        ConfigKey::Balance => config.balance.to_string(),
        ConfigKey::Account => config.account.clone(),
    }
}

fn key_name(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::UnitSuffix => "Unit suffix",
        ConfigKey::Separator => "Separator",
        ConfigKey::Placeholder => "Placeholder",
        ConfigKey::Balance => "Balance",
        ConfigKey::Account => "Account",
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: &str, path: &Path) -> Result<()> {
    let mut config = Config::load_from(path)?;
    apply(&mut config, key, value)?;
    config.save_to(path)?;

    tracing::info!(key = key_name(key), "configuration updated");
    println!("{} set to: {}", key_name(key), describe(&config, key));
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey, path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    println!("{}: {}", key_name(key), describe(&config, key));
    Ok(())
}

/// Handle resetting a configuration value
fn handle_remove(key: ConfigKey, path: &Path) -> Result<()> {
    let mut config = Config::load_from(path)?;
    let defaults = Config::default();

    match key {
        ConfigKey::UnitSuffix => config.unit_suffix = defaults.unit_suffix,
        ConfigKey::Separator => config.group_separator = defaults.group_separator,
        ConfigKey::Placeholder => config.placeholder = defaults.placeholder,
        ConfigKey::Balance => config.balance = defaults.balance,
        ConfigKey::Account => config.account = defaults.account,
    }
    if let Some(problem) = unit_suffix_problem(&config.unit_suffix, config.group_separator) {
        return Err(PointsError::InvalidInput(problem));
    }
    config.save_to(path)?;

    println!(
        "{} reset to default: {}",
        key_name(key),
        describe(&config, key)
    );
    Ok(())
}
