//! Non-marker character counting

use crate::constants::MARKER_CHAR;

/// Strip one trailing `\n` or `\r\n`
pub fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

/// Totals after a stream has been counted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Number of lines observed
    pub lines: u64,
    /// Sum of all per-line counts
    pub total: u64,
}

/// Running counter of characters other than a marker
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharCounter {
    marker: char,
    summary: CountSummary,
}

impl CharCounter {
    pub fn new(marker: char) -> Self {
        Self {
            marker,
            summary: CountSummary::default(),
        }
    }

    /// Count characters in `line` that are not the marker
    ///
    /// A trailing line terminator is not counted. Characters are Unicode
    /// scalar values, not bytes.
    pub fn count_line(&self, line: &str) -> u64 {
        strip_line_terminator(line)
            .chars()
            .filter(|&c| c != self.marker)
            .count() as u64
    }

    /// Count `line` and add it to the running total
    pub fn observe(&mut self, line: &str) -> u64 {
        let count = self.count_line(line);
        self.summary.lines += 1;
        self.summary.total += count;
        count
    }

    pub fn summary(&self) -> CountSummary {
        self.summary
    }
}

impl Default for CharCounter {
    fn default() -> Self {
        Self::new(MARKER_CHAR)
    }
}
