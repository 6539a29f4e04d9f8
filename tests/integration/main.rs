//! Integration tests for mem.

mod util;

mod arg_tests;
mod invalid_config_tests;
mod valid_config_tests;

// The report tests need real memory counters to read.
#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
mod report_tests;
