//! aoc-scratch - Scratch computations for Advent of Code puzzles
//!
//! This crate provides functionality to:
//! - Search single-digit substitutions of a number list for a target LCM (2023 day 20)
//! - Count non-marker characters line by line over text inputs (2023 day 23)
//! - Count composite values along a fixed stride (2017 day 23, part 2)

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::char_counter::{count_lines, count_stream};
pub use app::composite_count::count_composites;
pub use app::typo_search::{SearchError, count_trials, search, search_parallel};
pub use constants::*;
pub use domain::composite::{RangeError, StrideRange, is_composite};
pub use domain::lcm::{LcmError, gcd, lcm, lcm_of};
pub use domain::marker::{CharCounter, CountSummary};
pub use domain::substitution::{Substitutions, Trial};
pub use infra::line_source::{InputError, InputSource, concat_lines};
