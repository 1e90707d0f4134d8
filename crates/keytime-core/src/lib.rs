//! Core data structures for keypad entry-time computation.
//!
//! This crate provides the value types shared by the keytime workspace: the
//! decimal digits, the cells of the 3×3 key grid, keypad layouts, and digit
//! codes. All of them are plain immutable data, built once per call and
//! discarded afterwards.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of the decimal digits 0-9
//! - [`position`]: Cell coordinates on the 3×3 key grid, with the
//!   [Chebyshev distance](Position::chebyshev_distance) between cells
//! - [`keypad`]: A keypad layout parsed from a string, mapping each of its
//!   nine distinct digits to a grid cell
//! - [`code`]: An ordered, non-empty sequence of digits to be typed
//!
//! # Examples
//!
//! ```
//! use keytime_core::{Digit, Keypad, Position};
//!
//! let keypad: Keypad = "923857614".parse()?;
//!
//! // The first distinct digit of the layout sits in the top-left cell.
//! assert_eq!(keypad.position(Digit::D9), Some(Position::new(0, 0)));
//!
//! // Digit 0 is not part of this layout.
//! assert_eq!(keypad.position(Digit::D0), None);
//! # Ok::<(), keytime_core::KeypadError>(())
//! ```

pub mod code;
pub mod digit;
pub mod keypad;
pub mod position;

// Re-export commonly used types
pub use self::{
    code::{Code, CodeError},
    digit::Digit,
    keypad::{Keypad, KeypadError},
    position::Position,
};
