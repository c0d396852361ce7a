mod common;
use common::*;
use miniasm::mach::Word;

fn result_of(instruction: &str) -> Word {
    let mut r = runtime(&format!("MEM 4\n{}", instruction));
    assert_eq!(exec(&mut r), "", "{}", instruction);
    r.memory().get(0).unwrap()
}

#[test]
fn test_examples() {
    assert_eq!(result_of("ADD 3 4 0"), 7);
    assert_eq!(result_of("EQU 5 5 0"), 1);
    assert_eq!(result_of("SHL 1 3 0"), 8);
}

#[test]
fn test_every_writing_instruction() {
    let cases: &[(&str, Word)] = &[
        ("SET 9 0", 9),
        ("ADD 3 4 0", 7),
        ("SUB 3 4 0", -1),
        ("MUL 3 4 0", 12),
        ("DIV 9 4 0", 2),
        ("MOD 9 4 0", 1),
        ("INC 3 0", 4),
        ("DEC 3 0", 2),
        ("NEC 3 0", -3),
        ("AND 6 3 0", 2),
        ("OR 6 3 0", 7),
        ("XOR 6 3 0", 5),
        ("FLIP 6 0", -7),
        ("NOT 6 0", 0),
        ("NOT 0 0", 1),
        ("SHL 3 2 0", 12),
        ("SHR 12 2 0", 3),
        ("ROL 3 31 0", Word::MIN + 1),
        ("ROR 3 1 0", Word::MIN + 1),
        ("EQU 5 6 0", 0),
        ("GTER 6 5 0", 1),
        ("LESS 6 5 0", 0),
        ("GEQ 5 6 0", 0),
        ("LEQ 5 6 0", 1),
        ("NOP 0", 1),
    ];
    for (instruction, expected) in cases {
        assert_eq!(result_of(instruction), *expected, "{}", instruction);
    }
}

#[test]
fn test_operands_read_before_write() {
    let mut r = runtime("MEM 2\nSET 5 0\nSET 1 1\nADD *0 *0 *1\nSUB *1 *0 0");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.memory().get(1).unwrap(), 10);
    assert_eq!(r.memory().get(0).unwrap(), 5);
}

#[test]
fn test_destination_through_pointer() {
    let mut r = runtime("MEM 4\nSET 3 1\nSET 42 *1\nOUT *3");
    assert_eq!(exec(&mut r), "42\n");
}
