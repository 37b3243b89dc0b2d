//! On-screen keypad layout and cursor

use crate::core::amount::{Digit, DigitKey};

/// A key emitted by the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    /// Digit or `00`
    Digits(DigitKey),
    /// Remove the last digit
    Back,
}

impl KeypadKey {
    /// Parse a replay token: `0`-`9`, `00` or `back`
    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            "00" => Some(KeypadKey::Digits(DigitKey::DoubleZero)),
            "back" => Some(KeypadKey::Back),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => DigitKey::from_char(c).map(KeypadKey::Digits),
                    _ => None,
                }
            }
        }
    }

    /// Label printed on the key face
    pub fn face(&self) -> &'static str {
        match self {
            KeypadKey::Digits(key) => key.as_str(),
            KeypadKey::Back => "←",
        }
    }
}

const fn digit(d: usize) -> KeypadKey {
    KeypadKey::Digits(DigitKey::Digit(Digit::ALL[d]))
}

/// Keypad rows, top to bottom
pub const LAYOUT: [[KeypadKey; 3]; 4] = [
    [digit(1), digit(2), digit(3)],
    [digit(4), digit(5), digit(6)],
    [digit(7), digit(8), digit(9)],
    [KeypadKey::Digits(DigitKey::DoubleZero), digit(0), KeypadKey::Back],
];

/// Cursor movement on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Highlighted key position. Moves clamp at the edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    row: usize,
    col: usize,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(row, column)` of the highlighted key
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(LAYOUT.len() - 1),
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.col = (self.col + 1).min(LAYOUT[0].len() - 1),
        }
    }

    /// Key under the cursor
    pub fn selected(&self) -> KeypadKey {
        LAYOUT[self.row][self.col]
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
