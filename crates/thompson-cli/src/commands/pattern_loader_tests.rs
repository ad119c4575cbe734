use std::io::Write;
use std::path::Path;

use super::pattern_loader::{is_stdin, load_pattern, strip_trailing_newline};

#[test]
fn inline_pattern_wins() {
    let pattern = load_pattern(Some("a|b"), None).unwrap();

    assert_eq!(pattern, "a|b");
}

#[test]
fn inline_pattern_keeps_newlines() {
    let pattern = load_pattern(Some("a\n"), None).unwrap();

    assert_eq!(pattern, "a\n");
}

#[test]
fn missing_pattern() {
    let err = load_pattern(None, None).unwrap_err();

    insta::assert_snapshot!(err, @"pattern is required: use positional argument or -f/--file");
}

#[test]
fn file_pattern_strips_one_newline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(a|b)*c\n\n").unwrap();

    let pattern = load_pattern(None, Some(file.path())).unwrap();

    assert_eq!(pattern, "(a|b)*c\n");
}

#[test]
fn file_pattern_strips_crlf() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a*\r\n").unwrap();

    let pattern = load_pattern(None, Some(file.path())).unwrap();

    assert_eq!(pattern, "a*");
}

#[test]
fn empty_file_is_the_empty_pattern() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let pattern = load_pattern(None, Some(file.path())).unwrap();

    assert_eq!(pattern, "");
}

#[test]
fn unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = load_pattern(None, Some(&path)).unwrap_err();

    assert!(err.starts_with("failed to read '"), "{err}");
    assert!(err.contains("missing.txt"), "{err}");
}

#[test]
fn dash_means_stdin() {
    assert!(is_stdin(Path::new("-")));
    assert!(!is_stdin(Path::new("-.txt")));
}

#[test]
fn trailing_newline_variants() {
    assert_eq!(strip_trailing_newline("ab"), "ab");
    assert_eq!(strip_trailing_newline("ab\n"), "ab");
    assert_eq!(strip_trailing_newline("ab\r\n"), "ab");
    assert_eq!(strip_trailing_newline("ab\n\n"), "ab\n");
    assert_eq!(strip_trailing_newline("\n"), "");
    assert_eq!(strip_trailing_newline(""), "");
}
