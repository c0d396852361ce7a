use super::Word;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

const WORD_BITS: Word = Word::BITS as Word;

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Word, rhs: Word) -> Word {
        lhs.wrapping_add(rhs)
    }

    pub fn subtract(lhs: Word, rhs: Word) -> Word {
        lhs.wrapping_sub(rhs)
    }

    pub fn multiply(lhs: Word, rhs: Word) -> Word {
        lhs.wrapping_mul(rhs)
    }

    pub fn divide(lhs: Word, rhs: Word) -> Result<Word> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn modulus(lhs: Word, rhs: Word) -> Result<Word> {
        match lhs.checked_rem(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn negate(val: Word) -> Word {
        val.wrapping_neg()
    }

    pub fn flip(val: Word) -> Word {
        !val
    }

    pub fn not(val: Word) -> Word {
        Operation::truth(val == 0)
    }

    /// Shift counts are taken modulo the word width.
    pub fn shift_left(lhs: Word, rhs: Word) -> Word {
        lhs.wrapping_shl(rhs as u32)
    }

    /// Arithmetic shift; the sign bit is copied in.
    pub fn shift_right(lhs: Word, rhs: Word) -> Word {
        lhs.wrapping_shr(rhs as u32)
    }

    pub fn rotate_left(lhs: Word, rhs: Word) -> Word {
        let mut bits = lhs as u32;
        for _ in 0..rhs.rem_euclid(WORD_BITS) {
            bits = (bits << 1) | (bits >> (WORD_BITS - 1));
        }
        bits as Word
    }

    pub fn rotate_right(lhs: Word, rhs: Word) -> Word {
        let mut bits = lhs as u32;
        for _ in 0..rhs.rem_euclid(WORD_BITS) {
            bits = (bits >> 1) | (bits << (WORD_BITS - 1));
        }
        bits as Word
    }

    pub fn equal(lhs: Word, rhs: Word) -> Word {
        Operation::truth(lhs == rhs)
    }

    pub fn greater(lhs: Word, rhs: Word) -> Word {
        Operation::truth(lhs > rhs)
    }

    pub fn less(lhs: Word, rhs: Word) -> Word {
        Operation::truth(lhs < rhs)
    }

    pub fn greater_equal(lhs: Word, rhs: Word) -> Word {
        Operation::truth(lhs >= rhs)
    }

    pub fn less_equal(lhs: Word, rhs: Word) -> Word {
        Operation::truth(lhs <= rhs)
    }

    fn truth(b: bool) -> Word {
        if b {
            1
        } else {
            0
        }
    }
}
