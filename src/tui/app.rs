//! Points screen state and logic
//!
//! The points screen hosts the exchange flow: it opens it, forwards keys to it
//! while it is visible, and handles the close notification.

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;

use crate::core::config::Config;
use crate::core::flow::{ExchangeFlow, FlowOutcome, FlowStage};
use crate::core::format::LabelFormat;
use crate::core::keypad::{Direction, KeypadKey};
use crate::core::DigitKey;
use crate::error::{PointsError, Result};
use crate::tui::event::{is_interrupt_key, is_quit_key, AppEvent, EventHandler};
use crate::tui::ui;

/// A confirmed exchange, as recorded by the points screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub amount: u64,
    pub requested_at: DateTime<Local>,
}

/// Main TUI application
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Exchange flow
    // ─────────────────────────────────────────────────────────────────────────
    /// The exchange session; only this screen mutates it
    pub flow: ExchangeFlow,
    /// How amounts are labelled
    pub label_format: LabelFormat,
    /// Prompt shown while no amount is entered
    pub placeholder: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Display data
    // ─────────────────────────────────────────────────────────────────────────
    /// Point balance (display only)
    pub balance: u64,
    /// Payout account (display only)
    pub account: String,
    /// Confirmed requests, newest first
    pub requests: Vec<ExchangeRequest>,

    tick_rate: Duration,
}

impl App {
    /// Create a new app instance from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            running: true,
            status_message: None,
            show_help: false,
            flow: ExchangeFlow::new(),
            label_format: LabelFormat::from_config(config),
            placeholder: config.placeholder.clone(),
            balance: config.balance,
            account: config.account.clone(),
            requests: Vec::new(),
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(16)),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| PointsError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| PointsError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| PointsError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| PointsError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| PointsError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| PointsError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(self.tick_rate);

        let result = self.event_loop(&mut terminal, &mut events).await;

        // Restore even when the loop failed
        Self::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| PointsError::Terminal(e.to_string()))?;

            match events.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key),
                Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {
                    // Redrawn on the next iteration
                }
                None => break,
            }
        }
        Ok(())
    }

    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        // The exchange popup takes every other key while it is visible
        if self.flow.is_open() {
            self.handle_flow_key(key);
            return;
        }

        if is_quit_key(&key) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('x') | KeyCode::Enter => self.open_exchange(),
            _ => {}
        }
    }

    fn handle_flow_key(&mut self, key: KeyEvent) {
        match self.flow.stage() {
            Some(FlowStage::Input) => self.handle_input_key(key),
            Some(FlowStage::Confirm) => self.handle_confirm_key(key),
            None => {}
        }
    }

    /// Keys while entering the amount
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = DigitKey::from_char(c) {
                    self.flow.press(KeypadKey::Digits(digit));
                }
            }
            KeyCode::Backspace => self.flow.press(KeypadKey::Back),
            KeyCode::Up | KeyCode::Char('k') => self.flow.move_cursor(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.flow.move_cursor(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => self.flow.move_cursor(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.flow.move_cursor(Direction::Right),
            KeyCode::Char(' ') => self.flow.press_selected(),
            KeyCode::Enter => {
                self.flow.submit();
            }
            KeyCode::Esc => {
                if let Some(outcome) = self.flow.cancel() {
                    self.on_flow_closed(outcome);
                }
            }
            _ => {}
        }
    }

    /// Keys on the review step
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let outcome = match key.code {
            KeyCode::Enter | KeyCode::Char('y') => self.flow.confirm(),
            KeyCode::Esc | KeyCode::Char('n') => self.flow.cancel(),
            _ => None,
        };
        if let Some(outcome) = outcome {
            self.on_flow_closed(outcome);
        }
    }

    /// Show the exchange popup with a fresh session
    pub fn open_exchange(&mut self) {
        self.flow.open();
        self.status_message = None;
    }

    /// Close notification from the exchange flow
    pub fn on_flow_closed(&mut self, outcome: FlowOutcome) {
        match outcome {
            FlowOutcome::Confirmed { amount, .. } => {
                let label = self.label_format.label_or(amount, "0").into_owned();
                tracing::info!(amount, "exchange request recorded");
                self.requests.insert(
                    0,
                    ExchangeRequest {
                        amount,
                        requested_at: Local::now(),
                    },
                );
                self.status_message = Some(format!(" Exchange of {} requested ", label));
            }
            FlowOutcome::Cancelled { stage } => {
                tracing::debug!(%stage, "exchange closed without confirming");
                self.status_message = Some(" Exchange cancelled ".to_string());
            }
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}
