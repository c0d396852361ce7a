use super::token::{Token, COMMENT_MARKER, INDIRECTION_MARKER};
use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Lexemes longer than this are rejected.
pub const MAX_LEXEME_LENGTH: usize = 4096;

pub fn lex(s: &str) -> Result<Vec<Token>> {
    let tokens: Vec<Token> = AsmLexer {
        chars: s.chars().peekable(),
    }
    .collect();
    for token in &tokens {
        if let Token::Comment(_) = token {
            continue;
        }
        if token.len() > MAX_LEXEME_LENGTH {
            return Err(error!(LexemeTooLong; format!("{} CHARACTERS", token.len())));
        }
    }
    Ok(tokens)
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Class {
    Alphas,
    Digits,
    Stars,
    Comment,
    Other,
}

fn class_of(c: char) -> Class {
    if c.is_ascii_alphabetic() {
        Class::Alphas
    } else if c.is_ascii_digit() {
        Class::Digits
    } else if c == INDIRECTION_MARKER {
        Class::Stars
    } else if c == COMMENT_MARKER {
        Class::Comment
    } else {
        Class::Other
    }
}

struct AsmLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> AsmLexer<'a> {
    fn run(&mut self, class: Class) -> String {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if class_of(*pk) != class {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        s
    }
}

impl<'a> Iterator for AsmLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pk = *self.chars.peek()?;
            return Some(match class_of(pk) {
                Class::Other => {
                    self.chars.next();
                    continue;
                }
                Class::Alphas => Token::Word(self.run(Class::Alphas)),
                Class::Digits => Token::Digits(self.run(Class::Digits)),
                Class::Stars => Token::Stars(self.run(Class::Stars)),
                Class::Comment => {
                    let rest = self.chars.by_ref().collect::<String>();
                    Token::Comment(rest.trim_end().to_string())
                }
            });
        }
    }
}
