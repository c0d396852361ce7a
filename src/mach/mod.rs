/*!
## Rust Machine Module

This Rust module is the virtual machine for miniasm: the memory pool,
operands, the instruction set and the engine that runs them.

*/

/// Index into a program's instruction list.
pub type Address = usize;
/// The machine word. Memory cells, literals and results are all words.
pub type Word = i32;

mod input;
mod memory;
mod opcode;
mod operation;
mod program;
mod runtime;
mod value;

#[cfg(test)]
mod tests;

pub use input::Words;
pub use memory::{Fill, MemoryPool, MAX_MEMORY_SIZE};
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use runtime::{Config, Event, Runtime, State, TIME_LIMIT};
pub use value::{Value, MAX_REFERENCE_DEPTH};
