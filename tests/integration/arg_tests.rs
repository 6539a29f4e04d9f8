//! These tests are mostly here just to ensure that arguments are understood
//! the way the help text says, and that bad ones are caught.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{mem_command, no_cfg_mem_command};

#[test]
fn test_help() {
    no_cfg_mem_command(&["/H"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("MEM - Report system memory.\n"))
        .stdout(predicate::str::contains("/U:<unit>"));
}

#[test]
fn test_question_mark_help() {
    no_cfg_mem_command(&["-?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show this help"));
}

#[test]
fn test_help_wins_over_everything() {
    no_cfg_mem_command(&["/U:B", "/V", "/h", "/L"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("MEM - Report system memory."))
        .stdout(predicate::str::contains("Total physical memory").not());
}

#[test]
fn test_help_wins_over_bad_long_options() {
    for args in [&["/H", "--bogus"][..], &["/H", "--units", "g"], &["--units=g", "-?"]] {
        no_cfg_mem_command(args)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("MEM - Report system memory."))
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn test_long_help() {
    no_cfg_mem_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Long options:"));
}

#[test]
fn test_help_ignores_missing_config() {
    mem_command(&["--config", "./tests/does_not_exist.toml", "/?"])
        .assert()
        .success();
}

#[test]
fn test_version() {
    mem_command(&["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_long_unit() {
    no_cfg_mem_command(&["--units", "g"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'g'"));
}

#[test]
fn test_units_without_value() {
    no_cfg_mem_command(&["--units"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("a value is required"));
}

#[test]
fn test_missing_config_file() {
    mem_command(&["--config", "./tests/does_not_exist.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unable to read the config file"));
}
