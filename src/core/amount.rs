//! Keypad amount entry
//!
//! Accumulates digits from the on-screen keypad into a bounded numeric
//! string. Input past the digit cap is dropped silently, and a lone leading
//! zero is replaced rather than extended.

use crate::core::format::LabelFormat;

/// Maximum number of digits an amount may have
pub const MAX_DIGITS: usize = 9;

const DIGIT_STRS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Every digit, indexed by value
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// `None` unless `value` is 0-9
    pub fn new(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    fn as_str(self) -> &'static str {
        DIGIT_STRS[usize::from(self.0)]
    }
}

/// Digit-producing keypad input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitKey {
    /// A single digit
    Digit(Digit),
    /// The `00` key, appended as one unit
    DoubleZero,
}

impl DigitKey {
    /// Digit key for a character, if it is `0`-`9`
    pub fn from_char(c: char) -> Option<Self> {
        Digit::from_char(c).map(DigitKey::Digit)
    }

    /// The characters this key contributes
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitKey::Digit(d) => d.as_str(),
            DigitKey::DoubleZero => "00",
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            DigitKey::Digit(d) => d.value() == 0,
            DigitKey::DoubleZero => true,
        }
    }
}

/// The digits entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountEntry {
    digits: String,
}

impl AmountEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw digit sequence, empty when nothing has been entered
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Append a digit (or `00`) to the amount.
    ///
    /// No-op once `MAX_DIGITS` is reached, including a `00` that would only
    /// fit halfway. When the amount is empty or exactly `"0"`, the key replaces
    /// it instead, and any zero key collapses to a single `"0"`.
    pub fn append_digit(&mut self, key: DigitKey) {
        let chunk = key.as_str();

        if self.digits.len() >= MAX_DIGITS {
            tracing::trace!(digits = %self.digits, "digit cap reached, input dropped");
            return;
        }

        if self.digits.is_empty() || self.digits == "0" {
            self.digits.clear();
            self.digits.push_str(if key.is_zero() { "0" } else { chunk });
            return;
        }

        if self.digits.len() + chunk.len() > MAX_DIGITS {
            tracing::trace!(digits = %self.digits, "digit cap reached, input dropped");
            return;
        }

        self.digits.push_str(chunk);
    }

    /// Remove the last digit; no-op when empty
    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    /// Clear back to the initial empty state
    pub fn reset(&mut self) {
        self.digits.clear();
    }

    /// Numeric value of the digits, 0 when empty
    pub fn derived_value(&self) -> u64 {
        // At most nine ASCII digits, so the only parse failure is the empty string.
        self.digits.parse().unwrap_or(0)
    }

    /// Grouped label with unit suffix, or empty when the value is zero
    pub fn display_label(&self, format: &LabelFormat) -> String {
        format.label(self.derived_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_from(keys: &str) -> AmountEntry {
        let mut entry = AmountEntry::new();
        for c in keys.chars() {
            entry.append_digit(DigitKey::from_char(c).unwrap());
        }
        entry
    }

    #[test]
    fn test_digit_key_from_char() {
        assert_eq!(DigitKey::from_char('7'), Some(DigitKey::Digit(Digit::ALL[7])));
        assert_eq!(DigitKey::from_char('a'), None);
        assert_eq!(DigitKey::DoubleZero.as_str(), "00");
    }

    #[test]
    fn test_digit_rejects_values_above_nine() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(255), None);
        assert!(Digit::ALL.iter().enumerate().all(|(i, d)| usize::from(d.value()) == i));
    }

    #[test]
    fn test_append_digits_in_order() {
        let entry = entry_from("123");
        assert_eq!(entry.digits(), "123");
        assert_eq!(entry.derived_value(), 123);
        assert_eq!(entry.display_label(&LabelFormat::default()), "123원");
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut entry = AmountEntry::new();
        entry.append_digit(DigitKey::Digit(Digit::ALL[0]));
        assert_eq!(entry.digits(), "0");

        entry.append_digit(DigitKey::Digit(Digit::ALL[5]));
        assert_eq!(entry.digits(), "5");
    }

    #[test]
    fn test_double_zero_on_zero_stays_single_zero() {
        let mut entry = AmountEntry::new();
        entry.append_digit(DigitKey::Digit(Digit::ALL[0]));
        entry.append_digit(DigitKey::DoubleZero);
        assert_eq!(entry.digits(), "0");

        let mut empty = AmountEntry::new();
        empty.append_digit(DigitKey::DoubleZero);
        assert_eq!(empty.digits(), "0");
    }

    #[test]
    fn test_double_zero_appends_two_zeros() {
        let mut entry = entry_from("12");
        entry.append_digit(DigitKey::DoubleZero);
        assert_eq!(entry.digits(), "1200");
        assert_eq!(entry.display_label(&LabelFormat::default()), "1,200원");
    }

    #[test]
    fn test_cap_is_a_silent_no_op() {
        let mut entry = entry_from("123456789");
        entry.append_digit(DigitKey::Digit(Digit::ALL[5]));
        assert_eq!(entry.digits(), "123456789");
        entry.append_digit(DigitKey::DoubleZero);
        assert_eq!(entry.digits(), "123456789");
    }

    #[test]
    fn test_double_zero_is_never_split_at_the_cap() {
        let mut entry = entry_from("12345678");
        entry.append_digit(DigitKey::DoubleZero);
        assert_eq!(entry.digits(), "12345678");

        entry.append_digit(DigitKey::Digit(Digit::ALL[0]));
        assert_eq!(entry.digits(), "123456780");
    }

    #[test]
    fn test_backspace() {
        let mut entry = entry_from("42");
        entry.backspace();
        assert_eq!(entry.digits(), "4");
        entry.backspace();
        assert!(entry.is_empty());
        entry.backspace();
        assert!(entry.is_empty());
        assert_eq!(entry.derived_value(), 0);
    }

    #[test]
    fn test_reset() {
        let mut entry = entry_from("98765");
        entry.reset();
        assert_eq!(entry.digits(), "");
        assert_eq!(entry.derived_value(), 0);
        assert_eq!(entry.display_label(&LabelFormat::default()), "");
    }

    #[test]
    fn test_zero_has_empty_label() {
        let entry = entry_from("0");
        assert_eq!(entry.derived_value(), 0);
        assert_eq!(entry.display_label(&LabelFormat::default()), "");
    }
}
