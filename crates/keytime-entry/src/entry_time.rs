use keytime_core::{Code, Keypad};

use crate::{EntryTimeError, cost};

/// Computes the time needed to type `code` on the keypad described by
/// `keypad`.
///
/// The keypad is validated first, so a bad layout is reported regardless of
/// the code. See [`Keypad`](keytime_core::Keypad) for the layout rules and
/// [`cost`] for the cost model.
///
/// # Errors
///
/// - [`EntryTimeError::InvalidInput`] if either string contains a character
///   that is not a decimal digit.
/// - [`EntryTimeError::InvalidKeypad`] if the layout does not reduce to
///   exactly nine distinct digits.
/// - [`EntryTimeError::EmptyCode`] if `code` is empty.
/// - [`EntryTimeError::DigitNotOnKeypad`] if a code digit is absent from the
///   layout.
///
/// # Examples
///
/// ```
/// use keytime_entry::entry_time;
///
/// // 1 sits at the top-left, 3 at the top-right: two horizontal steps.
/// assert_eq!(entry_time("13", "123456789")?, 2);
///
/// // The same trip on a layout that puts the two keys side by side.
/// assert_eq!(entry_time("13", "132456789")?, 1);
/// # Ok::<(), keytime_entry::EntryTimeError>(())
/// ```
pub fn entry_time(code: &str, keypad: &str) -> Result<u64, EntryTimeError> {
    let keypad = keypad.parse::<Keypad>()?;
    let code = code.parse::<Code>()?;
    entry_time_of(&code, &keypad)
}

/// Computes the entry time of an already-parsed code on an already-parsed
/// keypad.
///
/// # Errors
///
/// Returns [`EntryTimeError::DigitNotOnKeypad`] if a code digit is absent
/// from the layout. This is the only failure left once both inputs have been
/// parsed.
pub fn entry_time_of(code: &Code, keypad: &Keypad) -> Result<u64, EntryTimeError> {
    // Resolve every key up front so a missing digit surfaces before any
    // distance is summed.
    let mut positions = Vec::with_capacity(code.digits().len());
    for &digit in code.digits() {
        let position = keypad
            .position(digit)
            .ok_or(EntryTimeError::DigitNotOnKeypad { digit })?;
        positions.push(position);
    }

    let time = positions
        .windows(2)
        .map(|pair| {
            cost::PRESS_KEY_TIME
                + cost::MOVE_TO_ADJACENT_KEY_TIME * u64::from(pair[0].chebyshev_distance(pair[1]))
        })
        .sum::<u64>();
    Ok(cost::MOVE_TO_FIRST_KEY_TIME + time)
}

#[cfg(test)]
mod tests {
    use keytime_core::Digit;
    use proptest::{prelude::*, sample::select};

    use super::*;

    const CANONICAL: &str = "123456789";

    #[test]
    fn test_single_key_code_costs_nothing() {
        assert_eq!(entry_time("1", CANONICAL), Ok(0));
        assert_eq!(entry_time("9", CANONICAL), Ok(0));
        assert_eq!(entry_time("0", "016273849"), Ok(0));
    }

    #[test]
    fn test_horizontal_trip() {
        // 1 at (0, 0), 3 at (2, 0)
        assert_eq!(entry_time("13", CANONICAL), Ok(2));
    }

    #[test]
    fn test_diagonal_trip() {
        // 1 at (0, 0), 5 at (1, 1), 9 at (2, 2): one step each
        assert_eq!(entry_time("159", CANONICAL), Ok(2));
    }

    #[test]
    fn test_reversed_code_costs_the_same() {
        assert_eq!(entry_time("31", CANONICAL), entry_time("13", CANONICAL));
        assert_eq!(entry_time("951", CANONICAL), entry_time("159", CANONICAL));
    }

    #[test]
    fn test_repeated_key_costs_nothing() {
        assert_eq!(entry_time("5555", CANONICAL), Ok(0));
    }

    #[test]
    fn test_layout_changes_the_time() {
        // On "723581649", 7 and 2 are horizontal neighbours in the top row
        assert_eq!(entry_time("72", "723581649"), Ok(1));
        // On the canonical layout the same trip crosses the grid
        assert_eq!(entry_time("72", CANONICAL), Ok(2));
    }

    #[test]
    fn test_longer_code() {
        // 1 -> 9: 2 steps, 9 -> 1: 2 steps, 1 -> 2: 1 step
        assert_eq!(entry_time("1912", CANONICAL), Ok(5));
    }

    #[test]
    fn test_digit_not_on_keypad() {
        assert_eq!(
            entry_time("102", CANONICAL),
            Err(EntryTimeError::DigitNotOnKeypad { digit: Digit::D0 })
        );
    }

    #[test]
    fn test_invalid_code_character() {
        assert_eq!(
            entry_time("12a", CANONICAL),
            Err(EntryTimeError::InvalidInput { ch: 'a' })
        );
    }

    #[test]
    fn test_invalid_keypad_character() {
        assert_eq!(
            entry_time("12", "12345678x"),
            Err(EntryTimeError::InvalidInput { ch: 'x' })
        );
    }

    #[test]
    fn test_invalid_keypad_reported_for_every_code() {
        // The keypad is validated before the code, so even a bad code does
        // not mask the keypad failure
        for code in ["1", "159", "0", "", "12a"] {
            assert_eq!(
                entry_time(code, "12345678"),
                Err(EntryTimeError::InvalidKeypad { distinct: 8 })
            );
            assert_eq!(
                entry_time(code, "1234567890"),
                Err(EntryTimeError::InvalidKeypad { distinct: 10 })
            );
        }
    }

    #[test]
    fn test_empty_code() {
        assert_eq!(entry_time("", CANONICAL), Err(EntryTimeError::EmptyCode));
    }

    #[test]
    fn test_duplicated_layout_is_accepted() {
        // Repeated digits still reduce to nine distinct keys
        assert_eq!(entry_time("13", "1123456789"), Ok(2));
        assert_eq!(
            entry_time("13", "1123456789"),
            entry_time("13", CANONICAL)
        );
    }

    #[test]
    fn test_entry_time_of_typed_inputs() {
        let keypad: Keypad = CANONICAL.parse().unwrap();
        let code: Code = "159".parse().unwrap();
        assert_eq!(entry_time_of(&code, &keypad), Ok(2));
    }

    fn layout_strategy() -> impl Strategy<Value = String> {
        Just(('0'..='9').collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|digits| digits.into_iter().take(9).collect())
    }

    /// A random layout together with a code typed entirely on its keys.
    fn layout_and_code() -> impl Strategy<Value = (String, String)> {
        layout_strategy().prop_flat_map(|layout| {
            let keys: Vec<char> = layout.chars().collect();
            let code = proptest::collection::vec(select(keys), 1..32)
                .prop_map(|chars| chars.into_iter().collect::<String>());
            (Just(layout), code)
        })
    }

    proptest! {
        #[test]
        fn single_key_codes_cost_nothing(layout in layout_strategy(), index in 0..9usize) {
            let key = layout.chars().nth(index).unwrap();
            prop_assert_eq!(entry_time(&key.to_string(), &layout), Ok(0));
        }

        #[test]
        fn repeating_one_key_costs_nothing(
            layout in layout_strategy(),
            index in 0..9usize,
            repeats in 1..20usize,
        ) {
            let key = layout.chars().nth(index).unwrap();
            let code: String = std::iter::repeat_n(key, repeats).collect();
            prop_assert_eq!(entry_time(&code, &layout), Ok(0));
        }

        #[test]
        fn reversing_a_code_preserves_its_time((layout, code) in layout_and_code()) {
            let reversed: String = code.chars().rev().collect();
            prop_assert_eq!(entry_time(&reversed, &layout), entry_time(&code, &layout));
        }

        #[test]
        fn time_is_bounded_by_the_grid_diameter((layout, code) in layout_and_code()) {
            // No two cells are more than two steps apart on a 3×3 grid
            let time = entry_time(&code, &layout).unwrap();
            prop_assert!(time <= 2 * (code.len() as u64 - 1));
        }

        #[test]
        fn duplicating_a_layout_changes_nothing((layout, code) in layout_and_code()) {
            let duplicated = format!("{layout}{layout}");
            prop_assert_eq!(entry_time(&code, &duplicated), entry_time(&code, &layout));
        }
    }
}
