//! Format command handler

use crate::cli::commands::FormatArgs;
use crate::core::config::Config;
use crate::core::format::LabelFormat;
use crate::error::Result;

/// Print the label for an amount, or the placeholder for zero
pub fn handle_format(args: FormatArgs, config: &Config) -> Result<()> {
    let format = LabelFormat::from_config(config);
    println!("{}", format.label_or(args.amount, &config.placeholder));
    Ok(())
}
