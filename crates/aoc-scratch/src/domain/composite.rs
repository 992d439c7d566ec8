//! Composite detection over an arithmetic stride

use thiserror::Error;

/// Invalid stride parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("stride step must be positive")]
    ZeroStep,
    #[error("stride start {start} is past its end {end}")]
    Inverted { start: u64, end: u64 },
    /// Value count does not fit in `u64`
    #[error("stride {start}..={end} step {step} has more than u64::MAX values")]
    TooLong { start: u64, end: u64, step: u64 },
}

/// `start, start + step, ...` up to and including `end`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrideRange {
    start: u64,
    end: u64,
    step: u64,
}

impl StrideRange {
    pub fn new(start: u64, end: u64, step: u64) -> Result<Self, RangeError> {
        if step == 0 {
            return Err(RangeError::ZeroStep);
        }
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        if (end - start) / step == u64::MAX {
            return Err(RangeError::TooLong { start, end, step });
        }
        Ok(Self { start, end, step })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// Number of values in the stride (never zero)
    pub fn len(&self) -> u64 {
        (self.end - self.start) / self.step + 1
    }

    /// The `index`-th value
    pub fn nth_value(&self, index: u64) -> u64 {
        self.start + index * self.step
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len()).map(|i| self.nth_value(i))
    }
}

/// True if `n` has a divisor `d` with `2 <= d <= sqrt(n)`
///
/// 0 and 1 are not composite.
pub fn is_composite(n: u64) -> bool {
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return true;
        }
        d += 1;
    }
    false
}
