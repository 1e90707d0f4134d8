//! Keypad layouts and digit lookup.

use std::str::FromStr;

use crate::{Digit, Position};

/// A keypad layout: a bijective mapping from nine distinct digits to the
/// nine cells of the 3×3 key grid.
///
/// A layout is parsed from a string of decimal digits. Duplicate digits are
/// dropped, keeping the first occurrence of each value, and the surviving
/// digits are assigned to cells in row-major order: the first distinct digit
/// sits in the top-left cell, the ninth in the bottom-right. The
/// de-duplication happens before the size check, so a layout with repeated
/// digits that still contains exactly nine distinct digits is accepted.
///
/// One of the ten decimal digits is necessarily absent from every layout;
/// looking it up yields `None`.
///
/// # Examples
///
/// ```
/// use keytime_core::{Digit, Keypad, Position};
///
/// let keypad: Keypad = "123456789".parse()?;
/// assert_eq!(keypad.position(Digit::D1), Some(Position::new(0, 0)));
/// assert_eq!(keypad.position(Digit::D5), Some(Position::new(1, 1)));
/// assert_eq!(keypad.position(Digit::D0), None);
///
/// // Repeated digits are ignored; the layout below is the same keypad.
/// let duplicated: Keypad = "1123456789".parse()?;
/// assert_eq!(duplicated, keypad);
/// # Ok::<(), keytime_core::KeypadError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keypad {
    // Indexed by digit value; `None` marks the digit absent from the layout.
    keys: [Option<Position>; 10],
}

impl Keypad {
    /// Number of keys on a keypad.
    pub const KEY_COUNT: u8 = Position::CELL_COUNT;

    /// Returns the cell holding `digit`, or `None` if the digit is not part
    /// of this layout.
    #[must_use]
    pub fn position(&self, digit: Digit) -> Option<Position> {
        self.keys[usize::from(digit.value())]
    }

    /// Returns `true` if `digit` has a key on this keypad.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.position(digit).is_some()
    }
}

impl FromStr for Keypad {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut keys = [None; 10];
        let mut seen = [false; 10];
        let mut distinct: u8 = 0;
        for ch in s.chars() {
            let digit = Digit::from_char(ch).ok_or(KeypadError::InvalidDigit { ch })?;
            let index = usize::from(digit.value());
            if seen[index] {
                continue;
            }
            seen[index] = true;
            if distinct < Self::KEY_COUNT {
                keys[index] = Some(Position::from_index(distinct));
            }
            distinct += 1;
        }
        if distinct != Self::KEY_COUNT {
            return Err(KeypadError::WrongDistinctCount {
                distinct: usize::from(distinct),
            });
        }
        Ok(Self { keys })
    }
}

/// An error building a [`Keypad`] from a layout string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum KeypadError {
    /// The layout contains a character that is not a decimal digit.
    #[display("keypad contains a non-digit character {ch:?}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
    /// The layout does not reduce to exactly nine distinct digits.
    #[display("keypad has {distinct} distinct digits, expected {}", Keypad::KEY_COUNT)]
    WrongDistinctCount {
        /// Number of distinct digits found in the layout.
        distinct: usize,
    },
}
