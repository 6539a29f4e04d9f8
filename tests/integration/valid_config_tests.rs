//! These tests are for testing some valid config files.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::mem_command;

#[test]
fn test_empty_config() {
    mem_command(&["--config", "./tests/valid_configs/empty_config.toml", "/?"])
        .assert()
        .success();
}

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
#[test]
fn test_config_units() {
    mem_command(&["--config", "./tests/valid_configs/kilobytes.toml"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+ KB").unwrap());
}

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
#[test]
fn test_argument_beats_config_units() {
    mem_command(&["--config", "./tests/valid_configs/kilobytes.toml", "/U:M"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+ MB").unwrap());
}

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
#[test]
fn test_all_flags() {
    mem_command(&["--config", "./tests/valid_configs/all_flags.toml"])
        .env("LANG", "en_US.UTF-8")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\nTotal physical memory:"))
        .stdout(predicate::str::is_match(r"memory: +\d+ bytes\n").unwrap())
        .stdout(predicate::str::contains(",").not());
}
