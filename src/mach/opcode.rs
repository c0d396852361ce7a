use super::Value;

/// ## Virtual machine instruction set
///
/// The machine has no registers and no stack. Every operand is a `Value`
/// resolved against the memory pool when the instruction runs.
///
/// Operands named `dst` are index operands: they are resolved like any
/// other value and the result is the address of the cell written.
/// For example: `ADD *0 1 *0` increments the cell whose address is in cell 0.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** No operation
    Nop,
    /// Store the address of this instruction at `dst`. Written `NOP dst`.
    Mark(Value),

    // *** Memory and I/O
    /// Reallocate the memory pool. Nothing survives.
    Mem(Value),
    /// Read one integer from the input stream into `dst`.
    In(Value),
    Out(Value),
    Print(Value),
    Set(Value, Value),

    // *** Arithmetic
    Add(Value, Value, Value),
    Sub(Value, Value, Value),
    Mul(Value, Value, Value),
    Div(Value, Value, Value),
    Mod(Value, Value, Value),
    Inc(Value, Value),
    Dec(Value, Value),
    Nec(Value, Value),

    // *** Bitwise and logic
    And(Value, Value, Value),
    Or(Value, Value, Value),
    Xor(Value, Value, Value),
    Flip(Value, Value),
    Not(Value, Value),
    Shl(Value, Value, Value),
    Shr(Value, Value, Value),
    Rol(Value, Value, Value),
    Ror(Value, Value, Value),

    // *** Comparison
    Equ(Value, Value, Value),
    Gter(Value, Value, Value),
    Less(Value, Value, Value),
    Geq(Value, Value, Value),
    Leq(Value, Value, Value),

    // *** Branch control
    /// Absolute jump.
    Jmp(Value),
    /// Jump relative to the next instruction.
    Jmov(Value),
    /// Absolute jump when the first operand is not zero.
    Jif(Value, Value),
    /// Relative jump when the first operand is not zero.
    Jifm(Value, Value),
}

impl Opcode {
    /// Time charged for one execution. Only output is charged.
    pub fn cost(&self) -> usize {
        match self {
            Opcode::Out(_) | Opcode::Print(_) => 1,
            _ => 0,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        use Opcode::*;
        match self {
            Nop | Mark(_) => "NOP",
            Mem(_) => "MEM",
            In(_) => "IN",
            Out(_) => "OUT",
            Print(_) => "PRINT",
            Set(..) => "SET",
            Add(..) => "ADD",
            Sub(..) => "SUB",
            Mul(..) => "MUL",
            Div(..) => "DIV",
            Mod(..) => "MOD",
            Inc(..) => "INC",
            Dec(..) => "DEC",
            Nec(..) => "NEC",
            And(..) => "AND",
            Or(..) => "OR",
            Xor(..) => "XOR",
            Flip(..) => "FLIP",
            Not(..) => "NOT",
            Shl(..) => "SHL",
            Shr(..) => "SHR",
            Rol(..) => "ROL",
            Ror(..) => "ROR",
            Equ(..) => "EQU",
            Gter(..) => "GTER",
            Less(..) => "LESS",
            Geq(..) => "GEQ",
            Leq(..) => "LEQ",
            Jmp(_) => "JMP",
            Jmov(_) => "JMOV",
            Jif(..) => "JIF",
            Jifm(..) => "JIFM",
        }
    }

    pub fn operands(&self) -> Vec<Value> {
        use Opcode::*;
        match *self {
            Nop => vec![],
            Mark(a) | Mem(a) | In(a) | Out(a) | Print(a) | Jmp(a) | Jmov(a) => vec![a],
            Set(a, b) | Inc(a, b) | Dec(a, b) | Nec(a, b) | Flip(a, b) | Not(a, b)
            | Jif(a, b) | Jifm(a, b) => vec![a, b],
            Add(a, b, c) | Sub(a, b, c) | Mul(a, b, c) | Div(a, b, c) | Mod(a, b, c)
            | And(a, b, c) | Or(a, b, c) | Xor(a, b, c) | Shl(a, b, c) | Shr(a, b, c)
            | Rol(a, b, c) | Ror(a, b, c) | Equ(a, b, c) | Gter(a, b, c) | Less(a, b, c)
            | Geq(a, b, c) | Leq(a, b, c) => vec![a, b, c],
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())?;
        for value in self.operands() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}
