//! CLI command definitions using clap
//!
//! Defines the command structure for the `studypoints` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// studypoints - points exchange for a study-group tracker
///
/// Run without arguments to open the points screen.
#[derive(Parser, Debug)]
#[command(name = "studypoints", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "STUDYPOINTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config(ConfigArgs),

    /// Print the label shown for an amount
    Format(FormatArgs),

    /// Feed keypad keys through the exchange flow without a terminal
    Replay(ReplayArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
    },
    /// Reset a configuration value to its default
    Remove {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
    },
}

/// Configuration keys
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKey {
    /// Unit glyph appended to amounts
    UnitSuffix,
    /// Thousands separator (comma, period, space, apostrophe)
    Separator,
    /// Prompt shown before an amount is entered
    Placeholder,
    /// Point balance shown on the points screen
    Balance,
    /// Payout account shown on the points screen
    Account,
}

// ─────────────────────────────────────────────────────────────────────────────
// Format / Replay
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Amount in points
    pub amount: u64,
}

#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Keypad keys in order: 0-9, 00 or back
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Move to the confirm step after entering the keys
    #[arg(long)]
    pub submit: bool,

    /// Confirm the exchange (implies --submit)
    #[arg(long, conflicts_with = "cancel")]
    pub confirm: bool,

    /// Cancel the flow after entering the keys
    #[arg(long)]
    pub cancel: bool,
}
