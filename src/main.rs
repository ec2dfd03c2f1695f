use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use polycalc::{interpreter::evaluator::core::Context, run_line, run_script};

/// polycalc evaluates arithmetic and symbolic polynomial expressions, one line
/// at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells polycalc to treat CONTENTS as a path and run every line of that
    /// file.
    #[arg(short, long)]
    file: bool,

    /// Start with an empty environment instead of binding `test_var = 22`.
    #[arg(short, long)]
    no_seed: bool,

    /// Logging verbosity; `RUST_LOG` filters are applied on top.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// A single statement to run. Starts an interactive session when omitted.
    contents: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn init_logger(level: LogLevel) {
    env_logger::Builder::from_default_env().filter_level(level.into())
                                           .format_timestamp(None)
                                           .init();
}

const PROMPT: &str = ">> ";
const QUIT: &str = "quit";

/// Reads statements from stdin until `quit` or end of input.
fn repl(ctx: &mut Context) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(stdout)?;
            break;
        };
        let line = line.trim_end();
        if line == QUIT {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match run_line(line, ctx) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level);

    let mut ctx = if args.no_seed { Context::empty() } else { Context::new() };

    let Some(contents) = args.contents else {
        info!("starting interactive session");
        if let Err(e) = repl(&mut ctx) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. \
                                                    Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    for result in run_script(&script, &mut ctx) {
        match result {
            Ok(value) => println!("{value}"),
            Err(e) => println!("{e}"),
        }
    }
}
