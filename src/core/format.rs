//! Amount label formatting
//!
//! Turns an amount into the label shown above the keypad, e.g. `12,500원`.

use crate::core::config::{Config, GroupSeparator};

/// How amounts are rendered as labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    /// Thousands separator
    pub separator: char,
    /// Unit glyph appended after the number
    pub suffix: String,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            separator: GroupSeparator::default().as_char(),
            suffix: crate::core::config::DEFAULT_UNIT_SUFFIX.to_string(),
        }
    }
}

impl LabelFormat {
    /// Build the label format from user configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            separator: config.group_separator.as_char(),
            suffix: config.unit_suffix.clone(),
        }
    }

    /// Label for `value`, or an empty string for zero.
    ///
    /// Callers substitute their own placeholder prompt when this is empty.
    pub fn label(&self, value: u64) -> String {
        if value == 0 {
            return String::new();
        }
        format!("{}{}", group_digits(value, self.separator), self.suffix)
    }

    /// Label for `value`, falling back to `placeholder` for zero
    pub fn label_or<'a>(&self, value: u64, placeholder: &'a str) -> std::borrow::Cow<'a, str> {
        if value == 0 {
            std::borrow::Cow::Borrowed(placeholder)
        } else {
            std::borrow::Cow::Owned(self.label(value))
        }
    }
}

/// Insert `separator` between every group of three digits, counted from the right
pub fn group_digits(value: u64, separator: char) -> String {
    let raw = value.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);

    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}
