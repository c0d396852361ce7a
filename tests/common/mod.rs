use miniasm::mach::{Config, Event, Program, Runtime};

#[allow(dead_code)]
pub fn runtime(source: &str) -> Runtime {
    let program: Program = source.parse().unwrap();
    Runtime::new(program, Config::friendly())
}

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

#[allow(dead_code)]
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
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

/// Run to completion with `input` on standard input.
#[allow(dead_code)]
pub fn run_with(source: &str, input: &str) -> Result<String, miniasm::lang::Error> {
    let mut r = runtime(source);
    let mut out = Vec::new();
    r.run(input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}
