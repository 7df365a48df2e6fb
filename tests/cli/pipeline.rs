// tests/cli/pipeline.rs
use predicates::prelude::*;

use crate::common::Fixture;

#[test]
fn missing_file_aborts_without_output() {
    let fx = Fixture::new();
    fx.write("a.txt", "fine\n");
    fx.write("b.txt", "also fine\n");

    fx.cmd()
        .args(["-lwc", "a.txt", "missing.txt", "b.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("filecount: "))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn aggregate_prints_ratios_before_path() {
    let fx = Fixture::new();
    fx.write("a.txt", "hello world\n");
    fx.write("empty.txt", "");

    fx.cmd()
        .args(["-a", "-w", "a.txt", "empty.txt"])
        .assert()
        .success()
        .stdout("    2 6 12 a.txt\n    0 - - empty.txt\n");
}

#[test]
fn aggregate_fail_policy_aborts_on_empty_file() {
    let fx = Fixture::new();
    fx.write("a.txt", "hello world\n");
    fx.write("empty.txt", "");

    fx.cmd()
        .args(["-a", "--ratio-policy", "fail", "a.txt", "empty.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("divisor is zero"));
}

#[test]
fn recursive_walk_expands_directories() {
    let fx = Fixture::new();
    fx.write("dir/b.txt", "b\n");
    fx.write("dir/sub/a.txt", "a a\n");
    fx.write("top.txt", "t\n");

    fx.cmd()
        .args(["-r", "-w", "--order", "input", "top.txt", "dir"])
        .assert()
        .success()
        .stdout("    1 top.txt\n    1 dir/b.txt\n    2 dir/sub/a.txt\n");
}

#[cfg(unix)]
#[test]
fn directory_without_recursion_is_fatal() {
    let fx = Fixture::new();
    fx.write("dir/a.txt", "a\n");

    fx.cmd()
        .args(["-l", "dir"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn bounded_jobs_and_read_modes_agree() {
    let fx = Fixture::new();
    for i in 0..12 {
        fx.write(&format!("f{i:02}.txt"), &"word ".repeat(i));
    }
    let files: Vec<String> = (0..12).map(|i| format!("f{i:02}.txt")).collect();

    let unbounded = fx.cmd().arg("-lwc").args(&files).output().unwrap();
    let pooled = fx
        .cmd()
        .args(["-lwc", "-j", "2", "--read-mode", "whole"])
        .args(&files)
        .output()
        .unwrap();
    let tiny_chunks = fx
        .cmd()
        .args(["-lwc", "--chunk-size", "1"])
        .args(&files)
        .output()
        .unwrap();

    assert!(unbounded.status.success());
    assert_eq!(unbounded.stdout, pooled.stdout);
    assert_eq!(unbounded.stdout, tiny_chunks.stdout);
}

#[test]
fn read_count_is_logged_to_stderr() {
    let fx = Fixture::new();
    fx.write("a.txt", "hello world\n");

    fx.cmd()
        .env("FILECOUNT_LOG", "info")
        .args(["-c", "--chunk-size", "4", "a.txt"])
        .assert()
        .success()
        .stdout("   12 a.txt\n")
        .stderr(predicate::str::contains("read count"))
        .stderr(predicate::str::contains("reads=3"));
}

#[test]
fn quiet_silences_diagnostics() {
    let fx = Fixture::new();
    fx.write("a.txt", "hello\n");

    fx.cmd()
        .env_remove("FILECOUNT_LOG")
        .args(["-q", "-l", "a.txt"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn zero_jobs_is_a_config_error() {
    let fx = Fixture::new();
    fx.write("a.txt", "a\n");

    fx.cmd()
        .args(["-j", "0", "a.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}
