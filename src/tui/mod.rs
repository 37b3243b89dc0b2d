//! Terminal User Interface module
//!
//! The ratatui points screen that hosts the exchange flow.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
