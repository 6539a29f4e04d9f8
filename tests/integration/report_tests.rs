//! Tests that read the real memory counters of the machine running them.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_mem_command;

const SUMMARY: &str = r"^\d+ (MB|KB|bytes)(  \(\d+ (MB|KB|bytes) accessible to system\))?\n$";

#[test]
fn test_default_summary() {
    no_cfg_mem_command(&[])
        .assert()
        .success()
        .stdout(predicate::str::is_match(SUMMARY).unwrap())
        .stdout(predicate::str::starts_with("0 ").not())
        .stdout(predicate::str::contains(" MB"));
}

#[test]
fn test_bytes_summary() {
    no_cfg_mem_command(&["/B"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+ bytes").unwrap());
}

#[test]
fn test_first_unit_wins() {
    no_cfg_mem_command(&["/K", "/U:M"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+ KB").unwrap());
}

#[test]
fn test_unit_letter_ignores_case() {
    no_cfg_mem_command(&["-u:k"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+ KB").unwrap());
}

#[test]
fn test_unknown_switches_are_ignored() {
    no_cfg_mem_command(&["/X", "/U:G", "stray"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(SUMMARY).unwrap())
        .stdout(predicate::str::contains(" MB"));
}

#[test]
fn test_unknown_long_options_are_ignored() {
    no_cfg_mem_command(&["--bogus", "--x", "--colour=red"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(SUMMARY).unwrap());
}

#[test]
fn test_no_locale_never_groups() {
    no_cfg_mem_command(&["/L", "/B"])
        .env("LANG", "en_US.UTF-8")
        .assert()
        .success()
        .stdout(predicate::str::is_match(SUMMARY).unwrap());
}

#[test]
fn test_verbose_report() {
    no_cfg_mem_command(&["/V"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\nTotal physical memory:"))
        .stdout(predicate::str::contains("\nResident memory:"))
        .stdout(predicate::str::contains("\nAvailable virtual memory:"))
        .stdout(predicate::str::contains("\nAvailable process memory:\n  Private low memory:"))
        .stdout(predicate::str::is_match(r"  Shared high memory: +\d+ MB\n$").unwrap());
}

#[test]
fn test_verbose_columns_line_up() {
    let output = no_cfg_mem_command(&["/V", "/B"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let widths: Vec<usize> = stdout
        .lines()
        .filter(|line| line.ends_with(" bytes"))
        .map(str::len)
        .collect();

    assert!(widths.len() >= 7, "{stdout}");
    assert!(widths.iter().all(|width| *width == widths[0]), "{stdout}");
}
