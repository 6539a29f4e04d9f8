//! Display units and the grouped number formatter.

use std::{fmt, str::FromStr};

pub const KIBI_LIMIT: u64 = 1024;
pub const MEBI_LIMIT: u64 = 1024 * 1024;

/// The unit values are displayed in. Exactly one is active per run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum DisplayUnit {
    Bytes,
    Kibibytes,
    #[default]
    Mebibytes,
}

impl DisplayUnit {
    /// The integer divisor to go from bytes to this unit.
    #[inline]
    pub const fn divisor(self) -> u64 {
        match self {
            DisplayUnit::Bytes => 1,
            DisplayUnit::Kibibytes => KIBI_LIMIT,
            DisplayUnit::Mebibytes => MEBI_LIMIT,
        }
    }

    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            DisplayUnit::Bytes => "bytes",
            DisplayUnit::Kibibytes => "KB",
            DisplayUnit::Mebibytes => "MB",
        }
    }

    /// The width the numeric field is padded to in verbose mode, so that
    /// columns line up across lines. Wider units need fewer digits.
    #[inline]
    pub const fn verbose_width(self) -> usize {
        match self {
            DisplayUnit::Bytes => 15,
            DisplayUnit::Kibibytes => 11,
            DisplayUnit::Mebibytes => 7,
        }
    }

    /// Maps a unit letter (`B`, `K` or `M`, any case) to a unit.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'B' => Some(DisplayUnit::Bytes),
            'K' => Some(DisplayUnit::Kibibytes),
            'M' => Some(DisplayUnit::Mebibytes),
            _ => None,
        }
    }

    /// The lowercase letter used for this unit on the command line.
    pub const fn letter(self) -> char {
        match self {
            DisplayUnit::Bytes => 'b',
            DisplayUnit::Kibibytes => 'k',
            DisplayUnit::Mebibytes => 'm',
        }
    }
}

impl FromStr for DisplayUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                DisplayUnit::from_letter(letter).ok_or_else(|| format!("'{s}' is not a valid unit"))
            }
            _ => Err(format!("'{s}' is not a valid unit")),
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Renders `value` in base 10 with `separator` between every group of three
/// digits, counted from the right. An empty separator gives plain decimal.
pub fn format_grouped(value: u64, separator: &str) -> String {
    if value < 1000 {
        return value.to_string();
    }

    let mut grouped = format_grouped(value / 1000, separator);
    grouped.push_str(separator);
    grouped.push_str(&format!("{:03}", value % 1000));
    grouped
}

/// Converts `value` (in bytes) to `unit` with truncating division, groups the
/// digits and appends the unit suffix. In verbose mode the number is
/// right-aligned to [`DisplayUnit::verbose_width`].
pub fn format_sized(value: u64, unit: DisplayUnit, verbose: bool, separator: &str) -> String {
    let grouped = format_grouped(value / unit.divisor(), separator);

    if verbose {
        format!("{grouped:>width$} {unit}", width = unit.verbose_width())
    } else {
        format!("{grouped} {unit}")
    }
}
