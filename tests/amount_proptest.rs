//! Property tests for keypad amount entry and the exchange flow

use proptest::prelude::*;

use studypoints::core::{
    AmountEntry, Digit, DigitKey, ExchangeFlow, FlowOutcome, KeypadKey, LabelFormat, MAX_DIGITS,
};

fn keypad_key() -> impl Strategy<Value = KeypadKey> {
    prop_oneof![
        6 => (0usize..10).prop_map(|d| KeypadKey::Digits(DigitKey::Digit(Digit::ALL[d]))),
        2 => Just(KeypadKey::Digits(DigitKey::DoubleZero)),
        1 => Just(KeypadKey::Back),
    ]
}

fn apply(entry: &mut AmountEntry, key: KeypadKey) {
    match key {
        KeypadKey::Digits(digits) => entry.append_digit(digits),
        KeypadKey::Back => entry.backspace(),
    }
}

proptest! {
    #[test]
    fn digits_stay_within_cap(keys in prop::collection::vec(keypad_key(), 0..40)) {
        let mut entry = AmountEntry::new();
        for key in keys {
            apply(&mut entry, key);
            prop_assert!(entry.digits().len() <= MAX_DIGITS);
            prop_assert!(entry.digits().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn no_leading_zero_sequences(keys in prop::collection::vec(keypad_key(), 0..40)) {
        let mut entry = AmountEntry::new();
        for key in keys {
            apply(&mut entry, key);
            let digits = entry.digits();
            prop_assert!(digits == "0" || !digits.starts_with('0'));
        }
    }

    #[test]
    fn label_round_trips_to_value(keys in prop::collection::vec(keypad_key(), 0..40)) {
        let mut entry = AmountEntry::new();
        for key in keys {
            apply(&mut entry, key);
        }

        let format = LabelFormat::default();
        let label = entry.display_label(&format);
        let value = entry.derived_value();

        if value == 0 {
            prop_assert!(label.is_empty());
        } else {
            let stripped: String = label
                .trim_end_matches(format.suffix.as_str())
                .chars()
                .filter(|c| *c != format.separator)
                .collect();
            prop_assert_eq!(stripped.parse::<u64>().unwrap(), value);
            prop_assert_eq!(stripped, entry.digits());
        }
    }

    #[test]
    fn backspace_on_empty_is_idempotent(times in 1usize..5) {
        let mut entry = AmountEntry::new();
        for _ in 0..times {
            entry.backspace();
        }
        prop_assert_eq!(entry, AmountEntry::new());
    }

    #[test]
    fn closing_always_resets(keys in prop::collection::vec(keypad_key(), 0..20), submit in any::<bool>()) {
        let mut flow = ExchangeFlow::new();
        flow.open();
        for key in keys {
            flow.press(key);
        }
        let expected = flow.amount();

        let outcome = if submit {
            flow.submit();
            flow.confirm()
        } else {
            flow.cancel()
        };

        match outcome {
            Some(FlowOutcome::Confirmed { amount, .. }) => prop_assert_eq!(amount, expected),
            Some(FlowOutcome::Cancelled { .. }) => prop_assert!(!submit),
            None => prop_assert!(false, "an open flow always closes"),
        }
        prop_assert!(!flow.is_open());
        prop_assert_eq!(flow.entry().digits(), "");
        prop_assert_eq!(flow.amount(), 0);
    }
}
