use crate::lang::ErrorCode;
use crate::mach::{Config, Event, Program, Runtime, State, Word};


fn runtime(source: &str) -> Runtime {
    let program: Program = source.parse().unwrap();
    Runtime::new(program, Config::friendly())
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input => {
                s.push_str("? ");
                break;
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

fn cell(runtime: &Runtime, index: Word) -> Word {
    runtime.memory().get(index).unwrap()
}

#[test]
fn test_arithmetic() {
    let mut r = runtime(
        "MEM 8\n\
         ADD 3 4 0\n\
         SUB 3 4 1\n\
         MUL 6 7 2\n\
         DIV 7 2 3\n\
         MOD 7 4 4\n\
         INC 9 5\n\
         DEC 9 6\n\
         NEC 9 7",
    );
    assert_eq!(run(&mut r), "");
    let cells: Vec<Word> = (0..8).map(|i| cell(&r, i)).collect();
    assert_eq!(cells, vec![7, -1, 42, 3, 3, 10, 8, -9]);
}

#[test]
fn test_bitwise_and_compare() {
    let mut r = runtime(
        "MEM 16\n\
         AND 12 10 0\n\
         OR 12 10 1\n\
         XOR 12 10 2\n\
         FLIP 0 3\n\
         NOT 0 4\n\
         NOT 7 5\n\
         SHL 1 3 6\n\
         SHR 64 2 7\n\
         ROL 1 1 8\n\
         ROR 1 1 9\n\
         EQU 5 5 10\n\
         GTER 5 5 11\n\
         LESS 4 5 12\n\
         GEQ 5 5 13\n\
         LEQ 6 5 14",
    );
    assert_eq!(run(&mut r), "");
    let cells: Vec<Word> = (0..15).map(|i| cell(&r, i)).collect();
    assert_eq!(
        cells,
        vec![8, 14, 6, -1, 1, 0, 8, 16, 2, Word::MIN, 1, 0, 1, 1, 0]
    );
}

#[test]
fn test_indirection() {
    let mut r = runtime(
        "MEM 4\n\
         SET 2 0\n\
         SET 3 2\n\
         SET 55 3\n\
         OUT **0\n\
         OUT ***0\n\
         SET 9 *0\n\
         OUT *2",
    );
    assert_eq!(run(&mut r), "3\n55\n9\n");
}

#[test]
fn test_values_resolved_every_execution() {
    let mut r = runtime(
        "MEM 1\n\
         SET 3 0\n\
         OUT *0\n\
         DEC *0 0\n\
         JIF *0 2",
    );
    assert_eq!(run(&mut r), "3\n2\n1\n");
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_print_matches_out() {
    let mut r = runtime("print 12\nout 12");
    assert_eq!(run(&mut r), "12\n12\n");
    assert_eq!(r.elapsed(), 2);
}

#[test]
fn test_mark_stores_own_address() {
    let mut r = runtime("MEM 8\nNOP\nNOP 7\nNOP *7");
    assert_eq!(run(&mut r), "");
    assert_eq!(cell(&r, 7), 2);
    assert_eq!(cell(&r, 2), 3);
}

#[test]
fn test_memory_resize_is_a_barrier() {
    let mut r = runtime("MEM 4\nSET 9 3\nMEM 4\nOUT *3\nMEM 2\nOUT *3");
    assert_eq!(run(&mut r), "0\nMEMORY INDEX ERROR IN 6; INDEX 3 OF 2\n");
    assert_eq!(r.state(), State::Faulted);
}

#[test]
fn test_memory_limit() {
    let mut r = runtime("MEM 10000001");
    assert_eq!(run(&mut r), "MEMORY LIMIT EXCEEDED IN 1; 10000001 CELLS REQUESTED\n");
}

#[test]
fn test_reference_overflow() {
    let mut stars = "*".repeat(257);
    stars.push('0');
    let mut r = runtime(&format!("MEM 1\nOUT {}", stars));
    assert_eq!(run(&mut r), "REFERENCES OVERFLOW IN 2; DEPTH 257\n");
}

#[test]
fn test_division_by_zero_faults() {
    let mut r = runtime("MEM 1\nOUT 1\nDIV 1 *0 0\nOUT 2");
    assert_eq!(run(&mut r), "1\nDIVISION BY ZERO IN 3\n");
}

#[test]
fn test_write_out_of_bounds() {
    let mut r = runtime("MEM 2\nSET 1 2");
    let out = run(&mut r);
    assert!(out.starts_with("MEMORY INDEX ERROR IN 2"));
}

#[test]
fn test_input() {
    let mut r = runtime("MEM 2\nIN 1\nADD *1 1 0\nOUT *0");
    assert_eq!(run(&mut r), "? ");
    assert_eq!(r.state(), State::Input);
    r.input(" -41\n");
    assert_eq!(run(&mut r), "-40\n");
}

#[test]
fn test_input_errors() {
    let mut r = runtime("MEM 1\nIN 0");
    assert_eq!(run(&mut r), "? ");
    r.input("forty");
    assert_eq!(run(&mut r), "INVALID INPUT IN 2; forty\n");

    let mut r = runtime("MEM 1\nIN 0");
    run(&mut r);
    r.close_input();
    assert_eq!(run(&mut r), "INPUT PAST END IN 2\n");
}

#[test]
fn test_input_ignored_when_not_waiting() {
    let mut r = runtime("MEM 1\nOUT 5");
    r.input("3");
    assert_eq!(run(&mut r), "5\n");
}

#[test]
fn test_interrupt() {
    let mut r = runtime("JMP 0");
    assert_eq!(
        run_cycles(&mut r, 100),
        "\n100 Execution cycles exceeded.\n"
    );
    r.interrupt();
    match r.execute(100) {
        Event::Error(e) => assert_eq!(e.code(), ErrorCode::Break),
        e => panic!("{:?}", e),
    }
    assert!(matches!(r.execute(100), Event::Stopped));
}

#[test]
fn test_empty_program_halts() {
    let mut r = runtime("; nothing\n\n");
    assert_eq!(run(&mut r), "");
    assert_eq!(r.state(), State::Halted);
    assert_eq!(r.pc(), 0);
}
