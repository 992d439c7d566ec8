//! Composite counting workflow

use crate::domain::composite::{StrideRange, is_composite};
use rayon::prelude::*;

/// Count composite values in `range`
///
/// Uses rayon parallel processing across the stride.
pub fn count_composites(range: &StrideRange) -> u64 {
    (0..range.len())
        .into_par_iter()
        .filter(|&i| is_composite(range.nth_value(i)))
        .count() as u64
}

/// Count composite values in `range` on the current thread
pub fn count_composites_sequential(range: &StrideRange) -> u64 {
    range.values().filter(|&n| is_composite(n)).count() as u64
}
