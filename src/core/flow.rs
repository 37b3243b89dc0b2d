//! Points exchange flow
//!
//! Two stages, `Input` then `Confirm`, plus a closed state that is never
//! rendered. The host opens the flow and reacts to the [`FlowOutcome`]
//! returned when it closes; the flow itself moves no points.

use crate::core::amount::AmountEntry;
use crate::core::keypad::{Direction, Keypad, KeypadKey};

/// Visible step of the exchange dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    /// Amount entry on the keypad
    Input,
    /// Review before the exchange is requested
    Confirm,
}

impl FlowStage {
    pub fn name(&self) -> &'static str {
        match self {
            FlowStage::Input => "input",
            FlowStage::Confirm => "confirm",
        }
    }
}

impl std::fmt::Display for FlowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Close notification handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Closed without confirming, from `stage`
    Cancelled { stage: FlowStage },
    /// Exchange of `amount` confirmed from `stage`
    Confirmed { amount: u64, stage: FlowStage },
}

/// The exchange session owned by the hosting screen
#[derive(Debug, Clone, Default)]
pub struct ExchangeFlow {
    entry: AmountEntry,
    keypad: Keypad,
    /// `None` while closed
    stage: Option<FlowStage>,
}

impl ExchangeFlow {
    /// A closed flow
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the flow, starting at `Input` with an empty amount.
    ///
    /// Opening an already open flow starts over.
    pub fn open(&mut self) {
        self.teardown();
        self.stage = Some(FlowStage::Input);
        tracing::debug!(stage = %FlowStage::Input, "exchange flow opened");
    }

    pub fn is_open(&self) -> bool {
        self.stage.is_some()
    }

    /// Current stage, `None` when closed
    pub fn stage(&self) -> Option<FlowStage> {
        self.stage
    }

    pub fn entry(&self) -> &AmountEntry {
        &self.entry
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn amount(&self) -> u64 {
        self.entry.derived_value()
    }

    /// Route a keypad key to the amount. Ignored outside `Input`.
    pub fn press(&mut self, key: KeypadKey) {
        if self.stage != Some(FlowStage::Input) {
            return;
        }
        match key {
            KeypadKey::Digits(digits) => self.entry.append_digit(digits),
            KeypadKey::Back => self.entry.backspace(),
        }
    }

    /// Press the key under the keypad cursor
    pub fn press_selected(&mut self) {
        self.press(self.keypad.selected());
    }

    /// Move the keypad cursor. Ignored outside `Input`.
    pub fn move_cursor(&mut self, direction: Direction) {
        if self.stage == Some(FlowStage::Input) {
            self.keypad.move_cursor(direction);
        }
    }

    /// `Input -> Confirm`. A zero amount is allowed through.
    ///
    /// Returns whether the stage changed.
    pub fn submit(&mut self) -> bool {
        if self.stage != Some(FlowStage::Input) {
            return false;
        }
        self.stage = Some(FlowStage::Confirm);
        tracing::debug!(amount = self.amount(), "exchange amount submitted");
        true
    }

    /// Close from either stage, discarding the amount
    pub fn cancel(&mut self) -> Option<FlowOutcome> {
        let stage = self.stage?;
        self.teardown();
        tracing::debug!(%stage, "exchange flow cancelled");
        Some(FlowOutcome::Cancelled { stage })
    }

    /// `Confirm -> Closed`, reporting the confirmed amount
    pub fn confirm(&mut self) -> Option<FlowOutcome> {
        if self.stage != Some(FlowStage::Confirm) {
            return None;
        }
        let amount = self.amount();
        self.teardown();
        tracing::debug!(amount, "exchange flow confirmed");
        Some(FlowOutcome::Confirmed {
            amount,
            stage: FlowStage::Confirm,
        })
    }

    fn teardown(&mut self) {
        self.entry.reset();
        self.keypad.reset();
        self.stage = None;
    }
}
