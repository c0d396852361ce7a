extern crate ansi_term;
extern crate ctrlc;
use ansi_term::Style;
use clap::Parser;
use miniasm::error;
use miniasm::lang::Error;
use miniasm::mach::{Config, Event, Fill, Program, Runtime, Words, TIME_LIMIT};
use std::fs;
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "miniasm", version, about = "Run a miniasm program")]
struct Args {
    /// Source file, or `-` for standard input
    file: Option<PathBuf>,
    /// Start with zeroed memory instead of random garbage
    #[arg(long)]
    friendly: bool,
    /// Print the compiled program instead of running it
    #[arg(long)]
    list: bool,
    /// Elapsed time allowed before the program is stopped
    #[arg(long, default_value_t = TIME_LIMIT)]
    time_limit: usize,
    /// Log engine activity to standard error
    #[arg(short, long)]
    verbose: bool,
}

pub fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        // a second Ctrl-C gets through even when IN is blocked reading
        if int_moved.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(&args, interrupted) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("miniasm=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> Result<(), Error> {
    let program: Program = load(args.file.as_deref())?.parse()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.list {
        return write!(out, "{}", program).map_err(io_error);
    }
    let config = Config {
        fill: if args.friendly { Fill::Zero } else { Fill::Random },
        time_limit: args.time_limit,
    };
    let mut runtime = Runtime::new(program, config);
    let stdin = io::stdin();
    let mut words = Words::new(stdin.lock());

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Running => {}
            Event::Stopped => break,
            Event::Print(s) => out.write_all(s.as_bytes()).map_err(io_error)?,
            Event::Input => {
                out.flush().map_err(io_error)?;
                match words.next() {
                    Some(Ok(word)) => runtime.input(&word),
                    Some(Err(error)) => return Err(io_error(error)),
                    None => runtime.close_input(),
                }
            }
            Event::Error(error) => {
                out.flush().ok();
                return Err(error);
            }
        }
    }
    out.flush().map_err(io_error)
}

fn load(file: Option<&Path>) -> Result<String, Error> {
    match file {
        Some(path) if path != Path::new("-") => match fs::read_to_string(path) {
            Ok(source) => Ok(source),
            Err(error) => {
                let msg = format!("{}: {}", path.display(), error);
                match error.kind() {
                    ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                    _ => Err(error!(InternalError; msg)),
                }
            }
        },
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(io_error)?;
            Ok(source)
        }
    }
}

fn io_error(error: io::Error) -> Error {
    error!(InternalError; error.to_string())
}
