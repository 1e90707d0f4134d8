//! Entry-time computation for 3×3 keypads.
//!
//! Given a keypad layout and a digit code, this crate computes the total
//! time needed to type the code: moving between two keys costs one time unit
//! per diagonal-inclusive grid step (the Chebyshev distance between their
//! cells), pressing a key is free, and so is the initial positioning on the
//! first key. The [`cost`] module names the individual constants of this
//! model.
//!
//! The computation is pure and synchronous; each call parses its inputs,
//! validates them, and folds over the code without retaining any state.
//!
//! # Examples
//!
//! ```
//! use keytime_entry::entry_time;
//!
//! // On the canonical layout, 159 walks the main diagonal: two single
//! // steps of one unit each.
//! assert_eq!(entry_time("159", "123456789")?, 2);
//!
//! // A single key needs no movement at all.
//! assert_eq!(entry_time("1", "123456789")?, 0);
//! # Ok::<(), keytime_entry::EntryTimeError>(())
//! ```
//!
//! Failures are reported as typed values before any distance is computed:
//!
//! ```
//! use keytime_entry::{EntryTimeError, entry_time};
//!
//! let err = entry_time("12", "12345678").unwrap_err();
//! assert_eq!(err, EntryTimeError::InvalidKeypad { distinct: 8 });
//! ```

pub mod cost;
mod entry_time;
mod error;

pub use self::{
    entry_time::{entry_time, entry_time_of},
    error::EntryTimeError,
};
