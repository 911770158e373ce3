use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn modval() -> Command {
    Command::cargo_bin("modval").unwrap()
}

#[test]
fn help_prints_usage_and_succeeds() {
    modval()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("USAGE: modval"))
        .stdout(contains("--max-struct-members"))
        .stdout(contains("--target-env"));
}

#[test]
fn version_lists_targets() {
    modval()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("modval "))
        .stdout(contains("Targets:"))
        .stdout(contains("Core 1.2"));
}

#[test]
fn help_wins_over_later_arguments() {
    modval()
        .args(["--help", "file1", "file2"])
        .assert()
        .success()
        .stdout(contains("USAGE: modval"));
}

#[test]
fn two_input_files_fail_before_validation() {
    modval()
        .args(["file1", "file2"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("more than one input file specified"));
}

#[test]
fn unknown_target_env_fails() {
    modval()
        .args(["--target-env", "core9.9"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unrecognized target environment: core9.9"));
}

#[test]
fn unknown_limit_option_fails() {
    modval()
        .args(["--max-quux", "7"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unrecognized option: --max-quux"));
}

#[test]
fn missing_limit_value_fails() {
    modval()
        .arg("--max-struct-depth")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("missing argument to --max-struct-depth"));
}

#[test]
fn unrecognized_flag_prints_usage_and_fails() {
    modval()
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(1)
        .stdout(contains("USAGE: modval"));
}

#[test]
fn empty_stdin_is_rejected_by_the_baseline_engine() {
    modval()
        .write_stdin(Vec::<u8>::new())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("error: 0: module contains no words"));
}

#[test]
fn word_aligned_stdin_passes_the_baseline_engine() {
    modval()
        .write_stdin(vec![1u8, 2, 3, 4, 5, 6, 7, 8])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn dash_reads_stdin() {
    modval()
        .arg("-")
        .write_stdin(vec![9u8, 9, 9, 9])
        .assert()
        .success();
}

#[test]
fn unaligned_stdin_is_an_input_error() {
    modval()
        .write_stdin(vec![1u8, 2, 3])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("is not a multiple of the 4-byte word size"));
}

#[test]
fn missing_file_is_an_input_error() {
    modval()
        .arg("definitely-not-here.bin")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to read input from definitely-not-here.bin"));
}

#[test]
fn file_input_with_overrides_passes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0u8; 16]).unwrap();
    file.flush().unwrap();

    modval()
        .args(["--target-env", "gpu1.0", "--max-struct-depth", "12"])
        .arg(file.path())
        .assert()
        .success();
}
