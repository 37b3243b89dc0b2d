//! studypoints - points exchange for a study-group tracker
//!
//! This library holds the keypad amount entry and the two-stage exchange flow
//! (input, then confirm), plus the CLI and TUI that host it.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{PointsError, Result};
