use super::lex::*;
use super::parse::*;
use super::token::*;
use super::{Error, LineNumber};
use crate::mach::Opcode;

/// ## One line of source text, lexed
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(number: LineNumber, s: &str) -> Result<Line, Error> {
        match lex(s) {
            Ok(tokens) => Ok(Line { number, tokens }),
            Err(e) => Err(e.in_line_number(number)),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens
            .iter()
            .all(|t| matches!(t, Token::Comment(_)))
    }

    pub fn instruction(&self) -> Result<Option<Opcode>, Error> {
        parse(self.number, &self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}
