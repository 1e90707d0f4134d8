//! The cost model of typing on a keypad.
//!
//! Entry time is `MOVE_TO_FIRST_KEY_TIME` plus, for every transition between
//! consecutive code digits, `PRESS_KEY_TIME` plus
//! `MOVE_TO_ADJACENT_KEY_TIME` per Chebyshev step between the two keys.
//! The zero-valued constants are named so the model reads off the code and
//! can be retuned in one place.

/// Cost of the initial positioning on the first key of the code.
pub const MOVE_TO_FIRST_KEY_TIME: u64 = 0;

/// Cost of one grid step between adjacent keys; diagonal steps cost the
/// same as horizontal or vertical ones.
pub const MOVE_TO_ADJACENT_KEY_TIME: u64 = 1;

/// Cost of pressing a key.
pub const PRESS_KEY_TIME: u64 = 0;
