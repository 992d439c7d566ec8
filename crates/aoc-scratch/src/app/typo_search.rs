//! Typo search workflow
//!
//! Tries every single-digit substitution of a template and keeps the trials
//! whose numbers have the target LCM.

use crate::domain::lcm::{LcmError, lcm_of_text};
use crate::domain::substitution::{Substitutions, Trial};
use rayon::prelude::*;
use std::iter::FusedIterator;
use thiserror::Error;

/// A trial that could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("trial '{trial}': {source}")]
pub struct SearchError {
    pub trial: String,
    #[source]
    pub source: LcmError,
}

/// Evaluate one trial: `Some(text)` on a hit, `None` on a miss
fn evaluate(trial: Trial, target: u128) -> Result<Option<String>, SearchError> {
    match lcm_of_text(&trial.text) {
        Ok(value) if value == target => Ok(Some(trial.text)),
        Ok(_) => Ok(None),
        Err(source) => Err(SearchError {
            trial: trial.text,
            source,
        }),
    }
}

/// Lazy search over all trials
///
/// Created by [`search`]. Stops after yielding the first error.
pub struct Search<'a> {
    trials: Substitutions<'a>,
    target: u128,
    failed: bool,
}

impl Iterator for Search<'_> {
    type Item = Result<String, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for trial in self.trials.by_ref() {
            match evaluate(trial, self.target) {
                Ok(Some(hit)) => return Some(Ok(hit)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }
}

impl FusedIterator for Search<'_> {}

/// Search the substitutions of `template` whose LCM equals `target`
///
/// Matches are yielded in trial order (position, then digit). The trial
/// identical to the template is evaluated like any other.
pub fn search(template: &str, target: u128) -> Search<'_> {
    Search {
        trials: Substitutions::new(template),
        target,
        failed: false,
    }
}

/// Parallel version of [`search`]
///
/// Evaluates all trials on the rayon pool. Returns the same matches in the
/// same order, or the first error in trial order.
pub fn search_parallel(template: &str, target: u128) -> Result<Vec<String>, SearchError> {
    let trials: Vec<Trial> = Substitutions::new(template).collect();

    let outcomes: Vec<Result<Option<String>, SearchError>> = trials
        .into_par_iter()
        .map(|trial| evaluate(trial, target))
        .collect();

    outcomes.into_iter().filter_map(Result::transpose).collect()
}

/// Number of trials [`search`] evaluates for `template`
pub fn count_trials(template: &str) -> usize {
    Substitutions::new(template).total()
}
