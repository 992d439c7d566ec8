//! Non-marker character counter CLI
//!
//! Usage: day23_count [--verbose] [FILE]...
//!
//! Reads the named files in order (stdin when none, `-` for stdin) and prints
//! the number of non-`#` characters of every line, then the total.
//!
//! Example:
//!   day23_count input.txt
//!   cat input.txt | day23_count

use aoc_scratch::constants::MARKER_CHAR;
use aoc_scratch::{InputError, InputSource, concat_lines, count_stream};
use std::env;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

struct Args {
    sources: Vec<InputSource>,
    verbose: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [FILE]...", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]...        Input files, read in order (default: stdin, '-' for stdin)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --verbose, -v    Report line count and timing on stderr");
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();
    let mut files = Vec::new();
    let mut verbose = false;
    let mut only_files = false;

    for arg in &args[1..] {
        match arg.as_str() {
            _ if only_files => files.push(arg.clone()),
            "--" => only_files = true,
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            "-" => files.push(arg.clone()),
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            _ => files.push(arg.clone()),
        }
    }

    Ok(Args {
        sources: InputSource::from_args(&files),
        verbose,
    })
}

enum RunError {
    Input(InputError),
    Output(io::Error),
}

fn run(args: &Args) -> Result<(), RunError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_error = None;

    let start = Instant::now();
    let summary = count_stream(concat_lines(&args.sources), MARKER_CHAR, |count| {
        // Flush per line so counts appear while the input is still streaming.
        if write_error.is_none()
            && let Err(e) = writeln!(out, "{}", count).and_then(|_| out.flush())
        {
            write_error = Some(e);
        }
    })
    .map_err(RunError::Input)?;

    if let Some(e) = write_error {
        return Err(RunError::Output(e));
    }

    writeln!(out, "{}", summary.total)
        .and_then(|_| out.flush())
        .map_err(RunError::Output)?;

    if args.verbose {
        eprintln!(
            "Counted {} line(s) from {} source(s) in {:.3} ms",
            summary.lines,
            args.sources.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&env::args().next().unwrap_or_else(|| "day23_count".into()));
            std::process::exit(1);
        }
    };

    match run(&args) {
        Ok(()) => {}
        Err(RunError::Input(e)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(RunError::Output(e)) => {
            eprintln!("Error writing output: {}", e);
            std::process::exit(1);
        }
    }
}
