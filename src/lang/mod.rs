/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of miniasm source.
Each line of text holds at most one instruction.

*/

mod error;
mod lex;
mod line;
mod parse;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::MAX_LEXEME_LENGTH;
pub use line::Line;
pub use parse::parse;
pub use parse::MAX_INTEGER_LENGTH;

/// 1-based line of the source text, when known.
pub type LineNumber = Option<usize>;
