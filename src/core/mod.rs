//! Core functionality for studypoints
//!
//! This module contains the points exchange logic:
//! - Keypad amount entry and its digit cap
//! - Keypad layout and cursor
//! - The input/confirm flow state machine
//! - Amount label formatting
//! - Application configuration

pub mod amount;
pub mod config;
pub mod flow;
pub mod format;
pub mod keypad;

pub use amount::{AmountEntry, Digit, DigitKey, MAX_DIGITS};
pub use config::Config;
pub use flow::{ExchangeFlow, FlowOutcome, FlowStage};
pub use format::LabelFormat;
pub use keypad::{Keypad, KeypadKey};
