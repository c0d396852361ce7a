use super::{Address, Opcode};
use crate::lang::{Error, Line, LineNumber};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Compiled instructions
///
/// Source lines are numbered from 1 as they are loaded, blank
/// and comment lines included, so errors point at the text.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Program {
    ops: Vec<Opcode>,
    line_numbers: Vec<LineNumber>,
    lines_loaded: usize,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, op: Opcode, line_number: LineNumber) {
        self.ops.push(op);
        self.line_numbers.push(line_number);
    }

    /// Lex and parse the next source line, appending its instruction.
    pub fn load_str(&mut self, s: &str) -> Result<()> {
        self.lines_loaded += 1;
        let line = Line::new(Some(self.lines_loaded), s)?;
        if let Some(op) = line.instruction()? {
            self.push(op, line.number());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn op(&self, addr: Address) -> Option<&Opcode> {
        self.ops.get(addr)
    }

    pub fn ops(&self) -> &[Opcode] {
        &self.ops
    }

    pub fn line_number_for(&self, addr: Address) -> LineNumber {
        self.line_numbers.get(addr).copied().flatten()
    }
}

impl std::str::FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Program> {
        let mut program = Program::new();
        for line in s.lines() {
            program.load_str(line)?;
        }
        debug!(
            instructions = program.len(),
            lines = program.lines_loaded,
            "program loaded"
        );
        Ok(program)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, op) in self.ops.iter().enumerate() {
            writeln!(f, "{:>6}  {}", addr, op)?;
        }
        Ok(())
    }
}
