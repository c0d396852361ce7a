use super::{MemoryPool, Word};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Dereference chains deeper than this are assumed to be runaway
/// self-references.
pub const MAX_REFERENCE_DEPTH: usize = 256;

/// ## Instruction operand
///
/// A literal plus the number of times it is chased through memory.
/// `5` is the number five, `*5` is the cell at five, `**5` is the
/// cell whose address is stored at five.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    literal: Word,
    depth: usize,
}

impl Value {
    pub fn new(literal: Word, depth: usize) -> Value {
        Value { literal, depth }
    }

    pub fn literal(&self) -> Word {
        self.literal
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn resolve(&self, memory: &MemoryPool) -> Result<Word> {
        if self.depth > MAX_REFERENCE_DEPTH {
            return Err(error!(ReferenceOverflow; format!("DEPTH {}", self.depth)));
        }
        let mut word = self.literal;
        for _ in 0..self.depth {
            word = memory.get(word)?;
        }
        Ok(word)
    }
}

impl From<Word> for Value {
    fn from(literal: Word) -> Value {
        Value::new(literal, 0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:*>w$}{}", "", self.literal, w = self.depth)
    }
}
