use keytime_core::{CodeError, Digit, KeypadError};

/// An error computing an entry time.
///
/// All failures are detected while validating the inputs, before any
/// distance is summed; there are no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EntryTimeError {
    /// The code string contains no digits.
    #[display("code is empty")]
    EmptyCode,
    /// A character in the code or keypad string is not a decimal digit.
    #[display("invalid input: {ch:?} is not a decimal digit")]
    InvalidInput {
        /// The offending character.
        ch: char,
    },
    /// The keypad does not reduce to exactly nine distinct digits.
    #[display("invalid keypad: {distinct} distinct digits, expected 9")]
    InvalidKeypad {
        /// Number of distinct digits found in the layout.
        distinct: usize,
    },
    /// A code digit has no key on the keypad.
    #[display("digit {digit} is not on the keypad")]
    DigitNotOnKeypad {
        /// The digit missing from the layout.
        digit: Digit,
    },
}

impl From<CodeError> for EntryTimeError {
    fn from(err: CodeError) -> Self {
        match err {
            CodeError::Empty => Self::EmptyCode,
            CodeError::InvalidDigit { ch } => Self::InvalidInput { ch },
        }
    }
}

impl From<KeypadError> for EntryTimeError {
    fn from(err: KeypadError) -> Self {
        match err {
            KeypadError::InvalidDigit { ch } => Self::InvalidInput { ch },
            KeypadError::WrongDistinctCount { distinct } => Self::InvalidKeypad { distinct },
        }
    }
}
