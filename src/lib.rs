//! # miniasm
//!
//! A tiny assembly-like language. A program is a list of instructions,
//! one per line, working on a single array of 32-bit integers.
//!
//! ```text
//! ; print 3, 2, 1
//! MEM 1
//! SET 3 0
//! OUT *0          ; address 2
//! DEC *0 0
//! JIF *0 2
//! ```
//!
//! Operands are decimal literals optionally preceded by `*` markers.
//! Each marker chases the value one more step through memory: `5` is
//! five, `*5` is the contents of cell five, `**5` is the contents of the
//! cell whose address is in cell five. Operands in the destination
//! position are resolved the same way and then name the cell written.
//!
//! | Instruction | Effect |
//! |---|---|
//! | `NOP`, `NOP dst` | nothing; store this instruction's address at `dst` |
//! | `MEM n` | reallocate memory to `n` cells, contents lost |
//! | `IN dst` | read an integer |
//! | `OUT v`, `PRINT v` | write `v` and a newline |
//! | `SET v dst` | copy |
//! | `ADD SUB MUL DIV MOD a b dst` | arithmetic |
//! | `INC DEC NEC v dst` | `v+1`, `v-1`, `-v` |
//! | `AND OR XOR a b dst`, `FLIP NOT v dst` | bitwise and logical |
//! | `SHL SHR ROL ROR a b dst` | shifts and rotates |
//! | `EQU GTER LESS GEQ LEQ a b dst` | comparisons giving 1 or 0 |
//! | `JMP t`, `JMOV d` | absolute and relative jumps |
//! | `JIF c t`, `JIFM c d` | the same, taken when `c` is not zero |
//!
//! Text after `;` is a comment. Mnemonics are case-insensitive.

pub mod lang;
pub mod mach;
