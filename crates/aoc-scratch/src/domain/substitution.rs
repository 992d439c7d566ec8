//! Single-digit substitutions of a template string
//!
//! A trial is a copy of the template with exactly one ASCII digit replaced
//! by another (or the same) digit. Separators are never touched.

use crate::constants::SUBSTITUTION_DIGITS;
use std::iter::FusedIterator;

/// One substitution candidate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trial {
    /// Byte offset of the replaced character in the template
    pub position: usize,
    /// Digit written at `position` (0-9)
    pub digit: u8,
    /// Full trial text
    pub text: String,
}

/// Byte offsets of every ASCII digit in `template`
pub fn digit_positions(template: &str) -> Vec<usize> {
    template
        .bytes()
        .enumerate()
        .filter(|(_, b)| b.is_ascii_digit())
        .map(|(i, _)| i)
        .collect()
}

/// Build the trial text for one (position, digit) pair
///
/// `position` must point at an ASCII digit; replacing one ASCII byte with
/// another keeps the string valid UTF-8.
fn substitute(template: &str, position: usize, digit: u8) -> String {
    let mut text = String::with_capacity(template.len());
    text.push_str(&template[..position]);
    text.push(char::from(b'0' + digit));
    text.push_str(&template[position + 1..]);
    text
}

/// Iterator over every trial of a template
///
/// Trials come in increasing position order, and for a fixed position in
/// increasing digit order from 0 to 9.
#[derive(Clone, Debug)]
pub struct Substitutions<'a> {
    template: &'a str,
    positions: Vec<usize>,
    next: usize,
}

impl<'a> Substitutions<'a> {
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            positions: digit_positions(template),
            next: 0,
        }
    }

    /// Total number of trials (eligible positions × 10)
    pub fn total(&self) -> usize {
        self.positions.len() * SUBSTITUTION_DIGITS as usize
    }
}

impl Iterator for Substitutions<'_> {
    type Item = Trial;

    fn next(&mut self) -> Option<Trial> {
        if self.next >= self.total() {
            return None;
        }

        let digits = SUBSTITUTION_DIGITS as usize;
        let position = self.positions[self.next / digits];
        let digit = (self.next % digits) as u8;
        self.next += 1;

        Some(Trial {
            position,
            digit,
            text: substitute(self.template, position, digit),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Substitutions<'_> {}

impl FusedIterator for Substitutions<'_> {}
