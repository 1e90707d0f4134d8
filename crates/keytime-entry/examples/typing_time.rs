//! Example computing the entry time of a code on a keypad layout.
//!
//! # Usage
//!
//! Compute a code's entry time on the canonical layout:
//!
//! ```sh
//! cargo run --example typing_time -- 159
//! ```
//!
//! Supply a custom layout (nine distinct digits, row-major):
//!
//! ```sh
//! cargo run --example typing_time -- 159 923857614
//! ```

use std::process;

use clap::Parser;
use keytime_entry::entry_time;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Digit code to type.
    code: String,

    /// Keypad layout string (nine distinct digits, row-major).
    #[arg(default_value = "123456789")]
    keypad: String,
}

fn main() {
    let args = Args::parse();
    match entry_time(&args.code, &args.keypad) {
        Ok(time) => println!("{time}"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    }
}
