//! Composite stride counter CLI
//!
//! Usage: aoc2017_day23 [--verbose]
//!
//! The 2017 day 23 program counts the composite values of register `b`
//! between its start value and register `c`, stepping by 17. Prints that
//! count (the final value of register `h`).

use aoc_scratch::constants::{STRIDE_END, STRIDE_START, STRIDE_STEP};
use aoc_scratch::{StrideRange, count_composites};
use std::env;
use std::time::Instant;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --verbose, -v    Report range and timing on stderr");
    eprintln!("  --help, -h       Show this help message");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut verbose = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    let range = match StrideRange::new(STRIDE_START, STRIDE_END, STRIDE_STEP) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let count = count_composites(&range);

    if verbose {
        eprintln!(
            "Checked {} value(s) from {} to {} step {} in {:.3} ms",
            range.len(),
            range.start(),
            range.end(),
            range.step(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    println!("{}", count);
}
