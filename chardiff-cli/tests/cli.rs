//! End-to-end tests driving the built `chardiff` binary.

use std::process::{Command, Output};

use chardiff_testhelpers::test;

fn chardiff(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chardiff"))
        .args(args)
        .env_remove("CHARDIFF_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run chardiff")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn plain_diff_of_literal_texts() {
    let output = chardiff(&["abc", "axc"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a[-b-]c\na{+x+}c\n");
}

#[test]
fn tie_break_is_stable_end_to_end() {
    let output = chardiff(&["--format", "plain", "ab", "ba"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a[-b-]\n{+b+}a\n");
}

#[test]
fn html_format() {
    let output = chardiff(&["--format", "html", "<a>", "<b>"]);
    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @r#"
    <div class="text1"><span class="unchanged">&lt;</span><span class="removed">a</span><span class="unchanged">&gt;</span></div>
    <div class="text2"><span class="unchanged">&lt;</span><span class="added">b</span><span class="unchanged">&gt;</span></div>
    "#);
}

#[test]
fn stat_line() {
    let output = chardiff(&["--stat", "kitten", "sitting"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).lines().last(),
        Some("4 unchanged, 3 added, 2 removed")
    );
}

#[test]
fn empty_text_is_invalid_input() {
    let output = chardiff(&["", "xyz"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert_eq!(
        stderr(&output).trim_end(),
        "Please enter text in both fields for comparison."
    );
}

#[test]
fn size_limit_is_enforced() {
    let output = chardiff(&["--max-units", "2", "abc", "ab"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("over the limit of 2"));
}

#[test]
fn grapheme_unit_from_the_command_line() {
    let output = chardiff(&["--unit", "grapheme", "e\u{301}", "e"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[-e\u{301}-]\n{+e+}\n");
}

#[test]
fn files_are_compared() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "hello world").unwrap();
    std::fs::write(&b, "yellow word").unwrap();

    let output = chardiff(&["--files", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "[-h-]ello wor[-l-]d\n{+y+}ello{+w+} word\n"
    );
}

#[test]
fn empty_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "").unwrap();
    std::fs::write(&b, "content").unwrap();

    let output = chardiff(&["--files", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn usage_errors_keep_their_own_status() {
    let output = chardiff(&["--unit", "word", "a", "b"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("word"));
}

#[test]
fn default_limits_refuse_tables_too_large_to_allocate() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "a".repeat(20_000)).unwrap();
    std::fs::write(&b, "b".repeat(20_000)).unwrap();

    let output = chardiff(&["--files", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("over the limit of 16000000"));
}

#[test]
fn largest_table_under_default_limits_is_diffed() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "a".repeat(3_999)).unwrap();
    std::fs::write(&b, "b".repeat(3_999)).unwrap();

    let output = chardiff(&[
        "--stat",
        "--files",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).lines().last(),
        Some("0 unchanged, 3999 added, 3999 removed")
    );
}

#[test]
fn missing_file_is_an_error() {
    let output = chardiff(&["--files", "/no/such/file", "/no/such/other"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("/no/such/file"));
}
