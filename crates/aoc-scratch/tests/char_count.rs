use aoc_scratch::constants::MARKER_CHAR;
use aoc_scratch::{InputError, InputSource, concat_lines, count_lines, count_stream};
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn file_source(file: &NamedTempFile) -> InputSource {
    InputSource::File(file.path().to_path_buf())
}

#[test]
fn test_scenario_from_file() {
    let file = temp_input("##.#\n....\n");
    let sources = vec![file_source(&file)];

    let mut emitted = Vec::new();
    let summary = count_stream(concat_lines(&sources), MARKER_CHAR, |c| emitted.push(c)).unwrap();

    assert_eq!(emitted, vec![1, 4]);
    assert_eq!(summary.total, 5);
}

#[test]
fn test_sources_are_concatenated() {
    let first = temp_input("#.#\n");
    let second = temp_input("..\r\n#\n...");
    let sources = vec![file_source(&first), file_source(&second)];

    let mut emitted = Vec::new();
    let summary = count_stream(concat_lines(&sources), MARKER_CHAR, |c| emitted.push(c)).unwrap();

    assert_eq!(emitted, vec![1, 2, 0, 3]);
    assert_eq!(summary.lines, 4);
    assert_eq!(summary.total, emitted.iter().sum::<u64>());
}

#[test]
fn test_unreadable_source_fails_run() {
    let first = temp_input("....\n");
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let sources = vec![file_source(&first), InputSource::File(missing.clone())];

    let mut emitted = Vec::new();
    let result = count_stream(concat_lines(&sources), MARKER_CHAR, |c| emitted.push(c));

    match result {
        Err(InputError::Open { name, .. }) => assert_eq!(name, missing.display().to_string()),
        other => panic!("expected open error, got {:?}", other),
    }
    // lines before the failing source were already reported
    assert_eq!(emitted, vec![4]);
}

#[test]
fn test_hash_only_and_plain_lines() {
    let (counts, summary) = count_lines(["##a#b##", "abc", "", "###"], MARKER_CHAR);
    assert_eq!(counts, vec![2, 3, 0, 0]);
    assert_eq!(summary.total, 5);
}
