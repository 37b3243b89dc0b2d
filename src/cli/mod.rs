//! CLI module for studypoints
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod format;
pub mod replay;

pub use commands::{Cli, Commands};
