use super::{token::Token, Error, LineNumber};
use crate::error;
use crate::mach::{Opcode, Value, Word};

type Result<T> = std::result::Result<T, Error>;

/// Longest run of digits accepted as a literal.
pub const MAX_INTEGER_LENGTH: usize = 10;

pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Option<Opcode>> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    remark: bool,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Option<Opcode>> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            remark: false,
        };
        let word = match parse.next() {
            None => return Ok(None),
            Some(Token::Word(word)) => word.to_ascii_uppercase(),
            Some(t) => {
                return Err(error!(SyntaxError; format!("EXPECTED INSTRUCTION, FOUND {}", t)))
            }
        };
        Ok(Some(parse.instruction(&word)?))
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        if self.remark {
            return None;
        }
        match self.token_stream.next()? {
            Token::Comment(_) => {
                self.remark = true;
                None
            }
            t => Some(t),
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn instruction(&mut self, word: &str) -> Result<Opcode> {
        use Opcode::*;
        match word {
            "NOP" => self.nop(),
            "MEM" => self.unary(Mem),
            "IN" => self.unary(In),
            "OUT" => self.unary(Out),
            "PRINT" => self.unary(Print),
            "SET" => self.binary(Set),
            "ADD" => self.ternary(Add),
            "SUB" => self.ternary(Sub),
            "MUL" => self.ternary(Mul),
            "DIV" => self.ternary(Div),
            "MOD" => self.ternary(Mod),
            "INC" => self.binary(Inc),
            "DEC" => self.binary(Dec),
            "NEC" => self.binary(Nec),
            "AND" => self.ternary(And),
            "OR" => self.ternary(Or),
            "XOR" => self.ternary(Xor),
            "FLIP" => self.binary(Flip),
            "NOT" => self.binary(Not),
            "SHL" => self.ternary(Shl),
            "SHR" => self.ternary(Shr),
            "ROL" => self.ternary(Rol),
            "ROR" => self.ternary(Ror),
            "EQU" => self.ternary(Equ),
            "GTER" => self.ternary(Gter),
            "LESS" => self.ternary(Less),
            "GEQ" => self.ternary(Geq),
            "LEQ" => self.ternary(Leq),
            "JMP" => self.unary(Jmp),
            "JMOV" => self.unary(Jmov),
            "JIF" => self.binary(Jif),
            "JIFM" => self.binary(Jifm),
            "CPY" | "EXIT" | "REQ" => Err(error!(UnsupportedInstruction; word)),
            _ => Err(error!(UnknownInstruction; word)),
        }
    }

    fn nop(&mut self) -> Result<Opcode> {
        if let Some(true) = self.peek().map(|t| t.is_operand()) {
            Ok(Opcode::Mark(self.value()?))
        } else {
            Ok(Opcode::Nop)
        }
    }

    fn unary(&mut self, op: fn(Value) -> Opcode) -> Result<Opcode> {
        Ok(op(self.value()?))
    }

    fn binary(&mut self, op: fn(Value, Value) -> Opcode) -> Result<Opcode> {
        let a = self.value()?;
        let b = self.value()?;
        Ok(op(a, b))
    }

    fn ternary(&mut self, op: fn(Value, Value, Value) -> Opcode) -> Result<Opcode> {
        let a = self.value()?;
        let b = self.value()?;
        let c = self.value()?;
        Ok(op(a, b, c))
    }

    fn value(&mut self) -> Result<Value> {
        let mut depth = 0;
        loop {
            match self.next() {
                None => return Err(error!(UnterminatedValue)),
                Some(Token::Stars(s)) => depth += s.len(),
                Some(Token::Digits(s)) => {
                    if s.len() > MAX_INTEGER_LENGTH {
                        return Err(error!(IntegerTooLong; s));
                    }
                    // ten digits can pass i32::MAX; keep the low 32 bits
                    let literal = s
                        .bytes()
                        .fold(0i64, |n, b| n * 10 + i64::from(b - b'0'));
                    return Ok(Value::new(literal as Word, depth));
                }
                Some(t) => return Err(error!(InvalidValue; format!("UNEXPECTED {}", t))),
            }
        }
    }
}
