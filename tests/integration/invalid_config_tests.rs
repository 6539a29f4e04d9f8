//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::mem_command;

#[test]
fn test_toml_mismatch_type() {
    mem_command(&["--config", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_invalid_units() {
    mem_command(&["--config", "./tests/invalid_configs/invalid_units.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'units' was set with an invalid value"));
}

#[test]
fn test_broken_toml() {
    mem_command(&["--config", "./tests/invalid_configs/lone_brace.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TOML parse error"));
}

/// A unit argument takes priority, so the bad config unit is never looked at.
#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
#[test]
fn test_invalid_units_with_unit_argument() {
    mem_command(&["--config", "./tests/invalid_configs/invalid_units.toml", "/K"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" KB"));
}
