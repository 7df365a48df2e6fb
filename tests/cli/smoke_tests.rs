// tests/cli/smoke_tests.rs
use predicates::prelude::*;

use crate::common::Fixture;

#[test]
fn shows_help() {
    Fixture::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("filecount"))
        .stdout(predicate::str::contains("--recursive"));
}

#[test]
fn requires_a_path() {
    Fixture::new().cmd().arg("-l").assert().code(2);
}

#[test]
fn counts_selected_fields_sorted_by_path() {
    let fx = Fixture::new();
    fx.write("b.txt", "x y");
    fx.write("a.txt", "hello world\n");

    fx.cmd()
        .args(["-lwc", "b.txt", "a.txt"])
        .assert()
        .success()
        .stdout("    1     2    12 a.txt\n    0     1     3 b.txt\n");
}

#[test]
fn input_order_keeps_argument_order() {
    let fx = Fixture::new();
    fx.write("b.txt", "x y");
    fx.write("a.txt", "hello world\n");

    fx.cmd()
        .args(["-l", "--order", "input", "b.txt", "a.txt"])
        .assert()
        .success()
        .stdout("    0 b.txt\n    1 a.txt\n");
}

#[test]
fn no_field_flags_prints_paths_only() {
    let fx = Fixture::new();
    fx.write("a.txt", "a b c\n");

    fx.cmd().arg("a.txt").assert().success().stdout("a.txt\n");
}

#[test]
fn verbose_echoes_arguments_first() {
    let fx = Fixture::new();
    fx.write("a.txt", "one\n");
    fx.write("b.txt", "two\n");

    fx.cmd()
        .args(["-v", "-w", "b.txt", "a.txt"])
        .assert()
        .success()
        .stdout("0:\tb.txt\n1:\ta.txt\n    1 a.txt\n    1 b.txt\n");
}

#[test]
fn trailing_word_is_opt_in() {
    let fx = Fixture::new();
    fx.write("ab.txt", "ab");

    fx.cmd()
        .args(["-w", "ab.txt"])
        .assert()
        .success()
        .stdout("    0 ab.txt\n");
    fx.cmd()
        .args(["-w", "--count-trailing-word", "ab.txt"])
        .assert()
        .success()
        .stdout("    1 ab.txt\n");
}

#[test]
fn json_format() {
    let fx = Fixture::new();
    fx.write("a.txt", "a b\n");

    let output = fx
        .cmd()
        .args(["--format", "json", "a.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "path": "a.txt", "chars": 4, "words": 2, "lines": 1 }])
    );
}

#[test]
fn total_row() {
    let fx = Fixture::new();
    fx.write("a.txt", "a\n");
    fx.write("b.txt", "b c\n");

    fx.cmd()
        .args(["-l", "--total", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("    1 a.txt\n    1 b.txt\n    2 TOTAL (2 files)\n");
}
