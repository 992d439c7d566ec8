//! LCM typo search CLI
//!
//! Usage: day20_typo [--verbose]
//!
//! Prints every single-digit substitution of the typed cycle lengths whose
//! LCM equals the accepted answer, one per line.

use aoc_scratch::constants::{TYPO_TARGET, TYPO_TEMPLATE};
use aoc_scratch::{count_trials, search};
use std::env;
use std::io::{self, Write};
use std::time::Instant;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --verbose, -v    Report trial count and timing on stderr");
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<bool, String> {
    let args: Vec<String> = env::args().collect();
    let mut verbose = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(verbose)
}

fn main() {
    let verbose = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&env::args().next().unwrap_or_else(|| "day20_typo".into()));
            std::process::exit(1);
        }
    };

    if verbose {
        eprintln!("Template: {}", TYPO_TEMPLATE);
        eprintln!("Target:   {}", TYPO_TARGET);
        eprintln!("Trials:   {}", count_trials(TYPO_TEMPLATE));
    }

    let start = Instant::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut found = 0usize;

    for hit in search(TYPO_TEMPLATE, TYPO_TARGET) {
        match hit {
            Ok(text) => {
                found += 1;
                if let Err(e) = writeln!(out, "{}", text) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if verbose {
        eprintln!(
            "Found {} match(es) in {:.3} ms",
            found,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
}
