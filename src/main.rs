//! # miniasm
//!
//! Runs a miniasm program from a file or standard input.
//!

mod term;

fn main() {
    term::main()
}
