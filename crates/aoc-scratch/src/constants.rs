//! Puzzle constants
//!
//! Every input of the scratch computations is fixed at compile time.

// =============================================================================
// 2023 day 20: LCM typo search
// =============================================================================

/// Cycle lengths as they were typed, including the suspected typo
pub const TYPO_TEMPLATE: &str = "3739 3797 3919 4003";

/// The answer the puzzle accepted
pub const TYPO_TARGET: u128 = 222_377_836_299_437;

/// Digits tried at every eligible position
pub const SUBSTITUTION_DIGITS: u8 = 10;

// =============================================================================
// 2023 day 23: marker counting
// =============================================================================

/// Character excluded from line counts (forest tiles)
pub const MARKER_CHAR: char = '#';

/// Argument that selects standard input in a file list
pub const STDIN_ARG: &str = "-";

// =============================================================================
// 2017 day 23: composite strides
// =============================================================================

/// First value of register `b`
pub const STRIDE_START: u64 = 109_300;

/// Value of register `c`, the last value checked
pub const STRIDE_END: u64 = 126_300;

/// Increment applied to `b` on every outer loop
pub const STRIDE_STEP: u64 = 17;
