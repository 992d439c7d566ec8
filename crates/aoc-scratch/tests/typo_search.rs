use aoc_scratch::constants::{TYPO_TARGET, TYPO_TEMPLATE};
use aoc_scratch::domain::lcm::lcm_of_text;
use aoc_scratch::{Substitutions, count_trials, search, search_parallel};

fn collect_matches(template: &str, target: u128) -> Vec<String> {
    search(template, target)
        .collect::<Result<_, _>>()
        .expect("search should not fail")
}

#[test]
fn test_puzzle_typo_found() {
    let matches = collect_matches(TYPO_TEMPLATE, TYPO_TARGET);
    assert_eq!(matches, vec!["3739 3797 3913 4003"]);
}

#[test]
fn test_puzzle_template_itself_misses_target() {
    assert_ne!(lcm_of_text(TYPO_TEMPLATE).unwrap(), TYPO_TARGET);
}

#[test]
fn test_matching_template_reported_unchanged() {
    let target = lcm_of_text(TYPO_TEMPLATE).unwrap();
    let matches = collect_matches(TYPO_TEMPLATE, target);

    assert!(matches.iter().any(|m| m == TYPO_TEMPLATE));
    for m in &matches {
        assert_eq!(lcm_of_text(m).unwrap(), target, "match {:?}", m);
    }
}

#[test]
fn test_trial_count_is_positions_times_ten() {
    assert_eq!(count_trials(TYPO_TEMPLATE), 16 * 10);
    assert_eq!(Substitutions::new(TYPO_TEMPLATE).count(), 160);
    assert_eq!(count_trials("1 22 333"), 6 * 10);
}

#[test]
fn test_every_trial_differs_in_at_most_one_place() {
    for trial in Substitutions::new(TYPO_TEMPLATE) {
        let diffs = TYPO_TEMPLATE
            .chars()
            .zip(trial.text.chars())
            .filter(|(a, b)| a != b)
            .count();
        assert!(diffs <= 1, "{:?}", trial);
    }
}

#[test]
fn test_single_token_scenario() {
    assert_eq!(collect_matches("99", 9), vec!["09"]);
}

#[test]
fn test_two_token_scenario() {
    assert_eq!(
        collect_matches("9 9", 9),
        vec!["1 9", "3 9", "9 9", "9 1", "9 3", "9 9"]
    );
}

#[test]
fn test_parallel_search_agrees() {
    assert_eq!(
        search_parallel(TYPO_TEMPLATE, TYPO_TARGET).unwrap(),
        collect_matches(TYPO_TEMPLATE, TYPO_TARGET)
    );
}

#[test]
fn test_malformed_token_is_an_error() {
    let err = search("12 a4", 12)
        .find_map(Result::err)
        .expect("malformed token must surface");
    assert!(err.to_string().contains("a4"), "{}", err);
}
