//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - Label formatting (unit suffix, thousands separator, placeholder)
//! - Read-only display data for the points screen (balance, account)
//! - Event loop tick rate

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{PointsError, Result};

/// Default unit glyph appended to amount labels
pub const DEFAULT_UNIT_SUFFIX: &str = "원";

/// Default prompt shown while no amount is entered
pub const DEFAULT_PLACEHOLDER: &str = "Enter points to exchange";

/// Thousands separator used in amount labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GroupSeparator {
    /// `1,000`
    #[default]
    Comma,
    /// `1.000`
    Period,
    /// `1 000`
    Space,
    /// `1'000`
    Apostrophe,
}

impl GroupSeparator {
    /// The separator character
    pub fn as_char(&self) -> char {
        match self {
            GroupSeparator::Comma => ',',
            GroupSeparator::Period => '.',
            GroupSeparator::Space => ' ',
            GroupSeparator::Apostrophe => '\'',
        }
    }

    /// Configuration name
    pub fn name(&self) -> &'static str {
        match self {
            GroupSeparator::Comma => "comma",
            GroupSeparator::Period => "period",
            GroupSeparator::Space => "space",
            GroupSeparator::Apostrophe => "apostrophe",
        }
    }

    /// Parse from a configuration name or the separator character itself
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "comma" | "," => Some(GroupSeparator::Comma),
            "period" | "." => Some(GroupSeparator::Period),
            "space" | " " => Some(GroupSeparator::Space),
            "apostrophe" | "'" => Some(GroupSeparator::Apostrophe),
            _ => None,
        }
    }

    /// Get all available separators
    pub fn all() -> &'static [GroupSeparator] {
        &[
            GroupSeparator::Comma,
            GroupSeparator::Period,
            GroupSeparator::Space,
            GroupSeparator::Apostrophe,
        ]
    }
}

impl std::fmt::Display for GroupSeparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Unit glyph appended to amount labels
    #[serde(default = "default_unit_suffix")]
    pub unit_suffix: String,

    /// Thousands separator for amount labels
    #[serde(default)]
    pub group_separator: GroupSeparator,

    /// Prompt shown while no amount has been entered
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Point balance shown on the points screen
    #[serde(default = "default_balance")]
    pub balance: u64,

    /// Payout account shown on the points screen and the confirm step
    #[serde(default = "default_account")]
    pub account: String,

    /// Event loop tick interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_unit_suffix() -> String {
    DEFAULT_UNIT_SUFFIX.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_balance() -> u64 {
    12_500
}

fn default_account() -> String {
    "Study Bank 110-123-456789".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_suffix: default_unit_suffix(),
            group_separator: GroupSeparator::default(),
            placeholder: default_placeholder(),
            balance: default_balance(),
            account: default_account(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Why `suffix` cannot end an amount label grouped with `separator`, if it can't.
///
/// The suffix must be one character that is neither a digit nor the separator,
/// otherwise a label like `1,2000` no longer reads back as one amount.
pub fn unit_suffix_problem(suffix: &str, separator: GroupSeparator) -> Option<String> {
    let mut chars = suffix.chars();
    let glyph = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Some(format!(
                "Invalid unit suffix '{}'. Use a single character, e.g. 원 or P.",
                suffix
            ))
        }
    };

    if glyph.is_ascii_digit() {
        return Some(format!(
            "Invalid unit suffix '{}'. A digit would run into the amount.",
            suffix
        ));
    }

    if glyph == separator.as_char() {
        return Some(format!(
            "Invalid unit suffix '{}'. It matches the {} separator.",
            suffix,
            separator.name()
        ));
    }

    None
}

impl Config {
    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            if let Some(problem) = unit_suffix_problem(&config.unit_suffix, config.group_separator)
            {
                return Err(PointsError::Config(format!(
                    "{} (in {})",
                    problem,
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the configuration directory
    pub fn config_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "studypoints", "studypoints")
            .ok_or_else(|| PointsError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().to_path_buf())
    }

    /// Use `explicit` when given, otherwise the default configuration path
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        }
    }
}
