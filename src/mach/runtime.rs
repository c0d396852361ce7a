use super::{Address, Fill, MemoryPool, Opcode, Operation, Program, Value, Word, Words};
use crate::error;
use crate::lang::Error;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Default ceiling on elapsed time, in instruction cost units.
pub const TIME_LIMIT: usize = 50_000_000;

/// Steps per `execute` call when `run` drives the machine.
const RUN_CYCLES: usize = 5000;

/// ## Settings fixed for the life of a runtime

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub fill: Fill,
    pub time_limit: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            fill: Fill::Random,
            time_limit: TIME_LIMIT,
        }
    }
}

impl Config {
    /// Zeroed memory; everything else default.
    pub fn friendly() -> Config {
        Config {
            fill: Fill::Zero,
            ..Config::default()
        }
    }
}

/// ## Events returned by `Runtime::execute`
#[derive(Debug)]
pub enum Event {
    /// The program ran off the end, or already stopped.
    Stopped,
    /// The cycle budget ran out. Call `execute` again.
    Running,
    /// Output from `OUT` or `PRINT`, newline included.
    Print(String),
    /// `IN` is waiting. Answer with `input` or `close_input`.
    Input,
    /// The program faulted and is stopped for good.
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Input,
    Halted,
    Faulted,
}

/// ## Execution engine
///
/// Owns the memory pool, the program counter and the clock. The host
/// drives it in slices with `execute` so it can print, read input and
/// react to interrupts between them.

pub struct Runtime {
    config: Config,
    program: Program,
    memory: MemoryPool,
    pc: Address,
    elapsed: usize,
    state: State,
    input: Option<(Address, Word)>,
    fault: Option<Error>,
    interrupted: bool,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Program::default(), Config::default())
    }
}

impl Runtime {
    pub fn new(program: Program, config: Config) -> Runtime {
        Runtime {
            config,
            program,
            memory: MemoryPool::new(config.fill),
            pc: 0,
            elapsed: 0,
            state: State::Running,
            input: None,
            fault: None,
            interrupted: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn memory(&self) -> &MemoryPool {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryPool {
        &mut self.memory
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn elapsed(&self) -> usize {
        self.elapsed
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Stop a running or waiting program at the next `execute`.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Answer an `Event::Input`. Ignored when nothing is waiting.
    pub fn input(&mut self, s: &str) {
        let (addr, dst) = match (self.state, self.input.take()) {
            (State::Input, Some(pending)) => pending,
            _ => return,
        };
        self.state = State::Running;
        let s = s.trim();
        let result = match s.parse::<Word>() {
            Ok(word) => self.memory.set(dst, word),
            Err(_) => Err(error!(InvalidInput; s)),
        };
        if let Err(error) = result {
            let line = self.program.line_number_for(addr);
            self.fault = Some(error.in_line_number(line));
        }
    }

    /// The input stream is exhausted.
    pub fn close_input(&mut self) {
        if let (State::Input, Some((addr, _))) = (self.state, self.input.take()) {
            self.state = State::Running;
            let line = self.program.line_number_for(addr);
            self.fault = Some(error!(InputPastEnd, line));
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(error) = self.fault.take() {
            return self.halt_with(error);
        }
        if self.interrupted {
            self.interrupted = false;
            if let State::Running | State::Input = self.state {
                let line = self.program.line_number_for(self.pc);
                return self.halt_with(error!(Break, line));
            }
        }
        match self.state {
            State::Running => {}
            State::Input => return Event::Input,
            State::Halted | State::Faulted => return Event::Stopped,
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => return self.halt_with(error),
            }
        }
        Event::Running
    }

    /// Run to completion, reading `IN` words from `input`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let mut words = Words::new(input);
        loop {
            match self.execute(RUN_CYCLES) {
                Event::Running => {}
                Event::Stopped => return output.flush().map_err(io_error),
                Event::Print(s) => output.write_all(s.as_bytes()).map_err(io_error)?,
                Event::Input => {
                    output.flush().map_err(io_error)?;
                    match words.next() {
                        Some(Ok(word)) => self.input(&word),
                        Some(Err(error)) => return Err(io_error(error)),
                        None => self.close_input(),
                    }
                }
                Event::Error(error) => {
                    output.flush().ok();
                    return Err(error);
                }
            }
        }
    }

    fn halt_with(&mut self, error: Error) -> Event {
        debug!(%error, pc = self.pc, elapsed = self.elapsed, "program faulted");
        self.state = State::Faulted;
        self.input = None;
        Event::Error(error)
    }

    fn step(&mut self) -> Result<Option<Event>> {
        if self.pc == self.program.len() {
            debug!(pc = self.pc, elapsed = self.elapsed, "program halted");
            self.state = State::Halted;
            return Ok(Some(Event::Stopped));
        }
        let addr = self.pc;
        let op = match self.program.op(addr) {
            Some(op) => *op,
            None => return Err(error!(InvalidPosition; format!("{}", addr))),
        };
        trace!(addr, %op, "step");
        self.pc += 1;
        let line = self.program.line_number_for(addr);
        let event = self
            .dispatch(addr, op)
            .map_err(|error| error.in_line_number(line))?;
        self.elapsed += op.cost();
        if self.elapsed > self.config.time_limit {
            let error = error!(TimeLimit, line; format!("{} UNITS", self.elapsed));
            if event.is_none() {
                return Err(error);
            }
            self.fault = Some(error);
        }
        Ok(event)
    }

    fn dispatch(&mut self, addr: Address, op: Opcode) -> Result<Option<Event>> {
        use Opcode::*;
        match op {
            Nop => {}
            Mark(dst) => self.store(dst, addr as Word)?,
            Mem(a) => {
                let len = self.value(a)?;
                self.memory.resize(len)?;
            }
            In(dst) => {
                let dst = self.value(dst)?;
                self.input = Some((addr, dst));
                self.state = State::Input;
                return Ok(Some(Event::Input));
            }
            Out(a) | Print(a) => {
                let word = self.value(a)?;
                return Ok(Some(Event::Print(format!("{}\n", word))));
            }
            Set(a, dst) => self.unary(a, dst, |w| w)?,
            Add(a, b, dst) => self.binary(a, b, dst, Operation::sum)?,
            Sub(a, b, dst) => self.binary(a, b, dst, Operation::subtract)?,
            Mul(a, b, dst) => self.binary(a, b, dst, Operation::multiply)?,
            Div(a, b, dst) => self.checked(a, b, dst, Operation::divide)?,
            Mod(a, b, dst) => self.checked(a, b, dst, Operation::modulus)?,
            Inc(a, dst) => self.unary(a, dst, |w| w.wrapping_add(1))?,
            Dec(a, dst) => self.unary(a, dst, |w| w.wrapping_sub(1))?,
            Nec(a, dst) => self.unary(a, dst, Operation::negate)?,
            And(a, b, dst) => self.binary(a, b, dst, |l, r| l & r)?,
            Or(a, b, dst) => self.binary(a, b, dst, |l, r| l | r)?,
            Xor(a, b, dst) => self.binary(a, b, dst, |l, r| l ^ r)?,
            Flip(a, dst) => self.unary(a, dst, Operation::flip)?,
            Not(a, dst) => self.unary(a, dst, Operation::not)?,
            Shl(a, b, dst) => self.binary(a, b, dst, Operation::shift_left)?,
            Shr(a, b, dst) => self.binary(a, b, dst, Operation::shift_right)?,
            Rol(a, b, dst) => self.binary(a, b, dst, Operation::rotate_left)?,
            Ror(a, b, dst) => self.binary(a, b, dst, Operation::rotate_right)?,
            Equ(a, b, dst) => self.binary(a, b, dst, Operation::equal)?,
            Gter(a, b, dst) => self.binary(a, b, dst, Operation::greater)?,
            Less(a, b, dst) => self.binary(a, b, dst, Operation::less)?,
            Geq(a, b, dst) => self.binary(a, b, dst, Operation::greater_equal)?,
            Leq(a, b, dst) => self.binary(a, b, dst, Operation::less_equal)?,
            Jmp(a) => {
                let target = self.value(a)?;
                self.jump(i64::from(target))?;
            }
            Jmov(a) => {
                let offset = self.value(a)?;
                self.jump(self.pc as i64 + i64::from(offset))?;
            }
            Jif(cond, a) => {
                if self.value(cond)? != 0 {
                    let target = self.value(a)?;
                    self.jump(i64::from(target))?;
                }
            }
            Jifm(cond, a) => {
                if self.value(cond)? != 0 {
                    let offset = self.value(a)?;
                    self.jump(self.pc as i64 + i64::from(offset))?;
                }
            }
        }
        Ok(None)
    }

    fn value(&self, value: Value) -> Result<Word> {
        value.resolve(&self.memory)
    }

    fn store(&mut self, dst: Value, word: Word) -> Result<()> {
        let index = self.value(dst)?;
        self.memory.set(index, word)
    }

    fn unary(&mut self, a: Value, dst: Value, f: fn(Word) -> Word) -> Result<()> {
        let a = self.value(a)?;
        self.store(dst, f(a))
    }

    fn binary(&mut self, a: Value, b: Value, dst: Value, f: fn(Word, Word) -> Word) -> Result<()> {
        let a = self.value(a)?;
        let b = self.value(b)?;
        self.store(dst, f(a, b))
    }

    fn checked(
        &mut self,
        a: Value,
        b: Value,
        dst: Value,
        f: fn(Word, Word) -> Result<Word>,
    ) -> Result<()> {
        let a = self.value(a)?;
        let b = self.value(b)?;
        self.store(dst, f(a, b)?)
    }

    fn jump(&mut self, target: i64) -> Result<()> {
        let len = self.program.len();
        if target < 0 || target as usize > len {
            return Err(error!(InvalidPosition; format!("{} OF {}", target, len)));
        }
        self.pc = target as Address;
        Ok(())
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(InternalError; error.to_string())
}
