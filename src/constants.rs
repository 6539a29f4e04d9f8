use indoc::indoc;

/// The name of the binary.
pub const PROGRAM_NAME: &str = "mem";

/// The config file location, relative to the platform config directory.
pub const DEFAULT_CONFIG_FILE_PATH: &str = "sysmem/sysmem.toml";

/// Where debug logs go when the `logging` feature is on.
pub const DEBUG_LOG_FILE: &str = "debug.log";

// Help text
pub const HELP_TITLE: &str = " - Report system memory.";

pub const HELP_TEXT: &str = indoc! {"
    Options:
      /H or /?    Show this help
      /L          Disable locale-specific number formatting (no grouping character)
      /U:<unit>   Use <unit> for output, where <unit> is one of:
         or /B      B   Bytes
         or /K      K   Binary kilobytes
                    M   Binary megabytes (default)
      /V          Verbose reporting

    Long options:
      --units <unit>    Same as /U:<unit>
      --verbose         Same as /V
      --no-locale       Same as /L
      --config <path>   Read default flags from a TOML config file
      --version         Show version information
"};

/// Returns the full help text, titled with `program`.
pub fn help_text(program: &str) -> String {
    format!("{program}{HELP_TITLE}\n\n{HELP_TEXT}")
}

// Report labels. Each is padded so the values start in the same column.
pub const TOTAL_LABEL: &str = "Total physical memory:    ";
pub const ACCESSIBLE_LABEL: &str = "Accessible to system:     ";
pub const ADDITIONAL_LABEL: &str = "Additional (PAE) memory:  ";
pub const RESIDENT_LABEL: &str = "Resident memory:          ";
pub const AVAILABLE_LABEL: &str = "Available virtual memory: ";
pub const PROCESS_HEADER: &str = "Available process memory:";
pub const PRIVATE_LOW_LABEL: &str = "  Private low memory:     ";
pub const PRIVATE_HIGH_LABEL: &str = "  Private high memory:    ";
pub const SHARED_LOW_LABEL: &str = "  Shared low memory:      ";
pub const SHARED_HIGH_LABEL: &str = "  Shared high memory:     ";
