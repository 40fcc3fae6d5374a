//! lox: Command-line front end for the Lox scanner.
//!
//! Usage:
//!   lox [options] [script]
//!
//! With a script, scans the file and prints one token per line. Without one,
//! starts an interactive prompt that scans each line as it is entered.
//! Set `RUST_LOG` (e.g. `RUST_LOG=lox_scanner=trace`) for tracing output.

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use lox_scanner::Scanner;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

#[derive(ClapParser, Debug)]
#[command(name = "lox", about = "Scan Lox source into tokens", version)]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Only report lexical errors; do not print tokens.
    #[arg(short, long)]
    quiet: bool,

    /// Disable coloured diagnostics.
    #[arg(long)]
    plain: bool,
}

// Exit statuses from sysexits.h.
const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_IOERR: i32 = 74;

#[derive(Debug, Error)]
enum RunError {
    #[error("could not read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Found {count} lexical error(s).")]
    Lexical { count: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RunError {
    fn exit_code(&self) -> i32 {
        match self {
            RunError::Lexical { .. } => EX_DATAERR,
            RunError::Read { .. } | RunError::Io(_) => EX_IOERR,
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EX_USAGE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_tracing();

    let use_color = !cli.plain && atty_is_terminal();
    let result = match cli.script {
        Some(ref path) => run_file(path, cli.quiet, use_color),
        None => run_prompt(cli.quiet, use_color),
    };

    if let Err(err) = result {
        match err {
            RunError::Lexical { .. } => print_summary(&err.to_string(), use_color),
            _ => print_error(&err.to_string(), use_color),
        }
        process::exit(err.exit_code());
    }
}

/// Install a stderr subscriber, but only when `RUST_LOG` asks for one.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run_file(path: &Path, quiet: bool, use_color: bool) -> Result<(), RunError> {
    let source = std::fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "scanning file");

    let count = run(&source, quiet, use_color)?;
    if count > 0 {
        return Err(RunError::Lexical { count });
    }
    Ok(())
}

fn run_prompt(quiet: bool, use_color: bool) -> Result<(), RunError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        if line == "exit" {
            break;
        }
        // Errors were already printed by the sink; the session carries on.
        let count = run(&line, quiet, use_color)?;
        tracing::debug!(errors = count, "prompt line scanned");
    }
    Ok(())
}

/// Scan `source`, printing errors as they are found and then the tokens.
/// Returns the number of lexical errors.
fn run(source: &str, quiet: bool, use_color: bool) -> io::Result<usize> {
    let mut report = |line: u32, message: &str| print_lexical_error(line, message, use_color);
    let output = Scanner::with_sink(source, &mut report).scan_tokens();

    if !quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for token in &output.tokens {
            writeln!(out, "{}", token)?;
        }
        out.flush()?;
    }
    Ok(output.error_count())
}

fn print_lexical_error(line: u32, message: &str, use_color: bool) {
    if use_color {
        eprintln!("{}[line {}]{} {}{}error{}: {}", GRAY, line, RESET, BOLD, RED, RESET, message);
    } else {
        eprintln!("[line {}] error: {}", line, message);
    }
}

fn print_summary(msg: &str, use_color: bool) {
    if use_color {
        eprintln!("\n{}{}{}", RED, msg, RESET);
    } else {
        eprintln!("\n{}", msg);
    }
}

fn print_error(msg: &str, use_color: bool) {
    if use_color {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
