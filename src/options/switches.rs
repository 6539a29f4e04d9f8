//! Rewriting DOS-style switches into the long options clap understands.
//!
//! A switch is a `/` or `-` followed by a letter, matched case-insensitively:
//!
//! - `/H` and `/?` ask for help.
//! - `/L` turns off locale grouping.
//! - `/U:<unit>` picks a unit from its third character, so `/U:K` and `/U=K`
//!   are the same. A missing or unknown unit letter is ignored, as is `/UK`.
//! - `/B` and `/K` are shorthands for `/U:B` and `/U:K`.
//! - `/V` asks for the verbose report.
//!
//! Anything else that starts with a single `/` or `-` is ignored, as are bare
//! words. `--long` options that [`build_app`](super::args::build_app) knows
//! pass through untouched, and unknown ones are dropped like any other unknown
//! switch.

use std::ffi::OsString;

use super::args::{LONG_OPTIONS, VALUE_OPTIONS};
use crate::utils::data_units::DisplayUnit;

/// Rewrites `args` (which does not include the program name) into canonical
/// long options.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut takes_value = false;

    for arg in args {
        if takes_value {
            takes_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            log::debug!("ignoring non-UTF-8 argument {arg:?}");
            continue;
        };

        if let Some(long) = text.strip_prefix("--") {
            let name = long.split_once('=').map_or(long, |(name, _)| name);
            if !LONG_OPTIONS.contains(&name) {
                log::debug!("ignoring unknown option '{text}'");
                continue;
            }
            takes_value = VALUE_OPTIONS.contains(&text);
            normalized.push(arg);
        } else if let Some(option) = translate_switch(text) {
            normalized.push(option.into());
        } else {
            log::debug!("ignoring argument '{text}'");
        }
    }

    normalized
}

/// Whether normalized `args` ask for help. Help wins over everything else, so
/// this is checked before the arguments are validated.
pub fn wants_help(args: &[OsString]) -> bool {
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            continue;
        };

        if text == "--help" || text.starts_with("--help=") {
            return true;
        } else if VALUE_OPTIONS.contains(&text) {
            // Skip the value, which may look like an option.
            args.next();
        }
    }

    false
}

/// Maps one switch to its long option, or `None` if it means nothing.
fn translate_switch(arg: &str) -> Option<OsString> {
    let mut chars = arg.chars();
    if !matches!(chars.next(), Some('/' | '-')) {
        return None;
    }

    let option = match chars.next()?.to_ascii_uppercase() {
        'H' | '?' => "--help".to_string(),
        'L' => "--no-locale".to_string(),
        'V' => "--verbose".to_string(),
        'B' => units_option(DisplayUnit::Bytes),
        'K' => units_option(DisplayUnit::Kibibytes),
        'U' => units_option(chars.nth(1).and_then(DisplayUnit::from_letter)?),
        _ => return None,
    };

    Some(option.into())
}

fn units_option(unit: DisplayUnit) -> String {
    format!("--units={}", unit.letter())
}
