//! Integration tests for line-oriented file reading.

use std::fs;
use std::path::PathBuf;

use rstest::rstest;

use seqkit::files::{LineError, LineReader, ReadError, for_each_line};

/// Creates a uniquely named scratch file with the given contents.
fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("seqkit-files-{}-{name}.txt", std::process::id()));
    fs::write(&path, contents).expect("scratch file should be writable");
    path
}

// =============================================================================
// LineReader Tests
// =============================================================================

#[rstest]
fn read_line_delivers_lines_without_their_newline() {
    let path = scratch_file("plain", "alpha\nbeta\ngamma\n");
    let mut reader = LineReader::open(&path).expect("file should open");

    assert_eq!(reader.read_line().expect("first line"), "alpha");
    assert_eq!(reader.read_line().expect("second line"), "beta");
    assert_eq!(reader.read_line().expect("third line"), "gamma");
    assert!(matches!(reader.read_line(), Err(ReadError::EndOfInput)));

    let _ = fs::remove_file(path);
}

#[rstest]
fn read_line_strips_carriage_returns() {
    let path = scratch_file("crlf", "alpha\r\nbeta\r\n");
    let mut reader = LineReader::open(&path).expect("file should open");

    assert_eq!(reader.read_line().expect("first line"), "alpha");
    assert_eq!(reader.read_line().expect("second line"), "beta");

    let _ = fs::remove_file(path);
}

#[rstest]
fn read_line_delivers_a_final_unterminated_line() {
    let path = scratch_file("unterminated", "alpha\nbeta");
    let mut reader = LineReader::open(&path).expect("file should open");

    assert_eq!(reader.read_line().expect("first line"), "alpha");
    assert_eq!(reader.read_line().expect("final line"), "beta");
    assert!(matches!(reader.read_line(), Err(ReadError::EndOfInput)));

    let _ = fs::remove_file(path);
}

#[rstest]
fn end_of_input_repeats_once_reached() {
    let path = scratch_file("empty", "");
    let mut reader = LineReader::open(&path).expect("file should open");

    assert!(matches!(reader.read_line(), Err(ReadError::EndOfInput)));
    assert!(matches!(reader.read_line(), Err(ReadError::EndOfInput)));

    let _ = fs::remove_file(path);
}

#[rstest]
fn open_reports_a_missing_file() {
    let missing = std::env::temp_dir().join("seqkit-files-does-not-exist.txt");
    assert!(LineReader::open(missing).is_err());
}

// =============================================================================
// for_each_line Tests
// =============================================================================

#[rstest]
fn for_each_line_visits_every_line_with_its_index() {
    let path = scratch_file("visit", "a\nb\nc\n");
    let mut visited = Vec::new();

    for_each_line(&path, |line, index| {
        visited.push((line.to_owned(), index));
        Ok::<(), ()>(())
    })
    .expect("visit should succeed");

    assert_eq!(
        visited,
        vec![("a".to_owned(), 0), ("b".to_owned(), 1), ("c".to_owned(), 2)]
    );

    let _ = fs::remove_file(path);
}

#[rstest]
fn for_each_line_stops_at_the_visitors_first_error() {
    let path = scratch_file("shortcircuit", "0\n1\n2\n3\n4\n");
    let mut visited = 0;

    let outcome = for_each_line(&path, |_, index| {
        if index == 2 {
            return Err("enough");
        }
        visited += 1;
        Ok(())
    });

    assert!(matches!(outcome, Err(LineError::Visitor("enough"))));
    assert_eq!(visited, 2);

    let _ = fs::remove_file(path);
}

#[rstest]
fn for_each_line_reports_a_missing_file_as_io() {
    let missing = std::env::temp_dir().join("seqkit-files-does-not-exist.txt");
    let outcome = for_each_line(missing, |_, _| Ok::<(), ()>(()));
    assert!(matches!(outcome, Err(LineError::Io(_))));
}
