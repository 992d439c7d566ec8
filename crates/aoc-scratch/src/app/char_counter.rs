//! Marker counting workflow
//!
//! Streams lines through a [`CharCounter`], reporting each line's count as
//! soon as it is known.

use crate::domain::marker::{CharCounter, CountSummary};

/// Count non-marker characters line by line
///
/// `on_line` receives every line's count immediately and in input order.
/// The returned summary holds the total over all lines. The first `Err`
/// from `lines` aborts the count and is returned as is.
pub fn count_stream<I, E, F>(lines: I, marker: char, mut on_line: F) -> Result<CountSummary, E>
where
    I: IntoIterator<Item = Result<String, E>>,
    F: FnMut(u64),
{
    let mut counter = CharCounter::new(marker);

    for line in lines {
        let count = counter.observe(&line?);
        on_line(count);
    }

    Ok(counter.summary())
}

/// Count in-memory lines, returning per-line counts and the summary
pub fn count_lines<I, S>(lines: I, marker: char) -> (Vec<u64>, CountSummary)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = CharCounter::new(marker);
    let counts = lines
        .into_iter()
        .map(|line| counter.observe(line.as_ref()))
        .collect();

    (counts, counter.summary())
}
