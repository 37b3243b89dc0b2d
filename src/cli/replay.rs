//! Replay command handler
//!
//! Drives a fresh exchange flow from keypad tokens, the same way the TUI
//! does from key presses, and prints the resulting state.

use crate::cli::commands::ReplayArgs;
use crate::core::config::Config;
use crate::core::flow::{ExchangeFlow, FlowOutcome};
use crate::core::format::LabelFormat;
use crate::core::keypad::KeypadKey;
use crate::error::{PointsError, Result};

/// Parse every token up front so a typo never leaves a half-replayed flow
pub fn parse_keys(tokens: &[String]) -> Result<Vec<KeypadKey>> {
    tokens
        .iter()
        .map(|token| {
            KeypadKey::parse_token(token).ok_or_else(|| {
                PointsError::InvalidInput(format!(
                    "Unknown keypad key '{}'.\n\n  → Use 0-9, 00 or back.",
                    token
                ))
            })
        })
        .collect()
}

/// Replay `keys` and return the lines to print
pub fn replay(args: &ReplayArgs, config: &Config) -> Result<Vec<String>> {
    let keys = parse_keys(&args.keys)?;
    let format = LabelFormat::from_config(config);

    let mut flow = ExchangeFlow::new();
    flow.open();
    for key in keys {
        flow.press(key);
    }

    let mut lines = vec![
        format!("digits: {}", flow.entry().digits()),
        format!("value: {}", flow.amount()),
        format!("label: {}", flow.entry().display_label(&format)),
    ];

    if args.submit || args.confirm {
        flow.submit();
    }

    let outcome = if args.confirm {
        flow.confirm()
    } else if args.cancel {
        flow.cancel()
    } else {
        None
    };

    match (outcome, flow.stage()) {
        (Some(FlowOutcome::Confirmed { amount, .. }), _) => {
            lines.push(format!("outcome: confirmed {}", format.label_or(amount, "0")));
        }
        (Some(FlowOutcome::Cancelled { stage }), _) => {
            lines.push(format!("outcome: cancelled at {}", stage));
        }
        (None, Some(stage)) => lines.push(format!("stage: {}", stage)),
        (None, None) => lines.push("stage: closed".to_string()),
    }

    Ok(lines)
}

/// Handle the replay command
pub fn handle_replay(args: ReplayArgs, config: &Config) -> Result<()> {
    for line in replay(&args, config)? {
        println!("{}", line);
    }
    Ok(())
}
