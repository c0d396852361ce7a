#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A run of ASCII letters.
    Word(String),
    /// A run of ASCII digits.
    Digits(String),
    /// A run of indirection markers.
    Stars(String),
    /// The comment marker and everything after it.
    Comment(String),
}

pub const INDIRECTION_MARKER: char = '*';
pub const COMMENT_MARKER: char = ';';

impl Token {
    pub fn len(&self) -> usize {
        use Token::*;
        match self {
            Word(s) | Digits(s) | Stars(s) | Comment(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Digits(_) | Token::Stars(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Word(s) => write!(f, "{}", s),
            Digits(s) => write!(f, "{}", s),
            Stars(s) => write!(f, "{}", s),
            Comment(s) => write!(f, "{}", s),
        }
    }
}
