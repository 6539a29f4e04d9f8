//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.
//!
//! Only the canonical long options live here. The DOS-style switches (`/V`,
//! `/U:K`, ...) are rewritten into these before clap ever sees them.

use clap::{builder::PossibleValuesParser, *};
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "mem [/H] [/L] [/U:<B|K|M>] [/B] [/K] [/V] [OPTIONS]";

/// The id of the help argument.
pub const HELP: &str = "help";
/// The id of the locale-disabling argument.
pub const NO_LOCALE: &str = "no_locale";
/// The id of the unit argument.
pub const UNITS: &str = "units";
/// The id of the verbose argument.
pub const VERBOSE: &str = "verbose";
/// The id of the config file argument.
pub const CONFIG: &str = "config";

/// Every long option `build_app` accepts.
pub const LONG_OPTIONS: [&str; 6] = ["help", "no-locale", "units", "verbose", "config", "version"];

/// Long options that take their value from the following token.
pub const VALUE_OPTIONS: [&str; 2] = ["--units", "--config"];

pub fn build_app() -> Command {
    let help = Arg::new(HELP)
        .long("help")
        .action(ArgAction::Count)
        .help("Shows the help text and exits. Same as /H or /?.");

    let no_locale = Arg::new(NO_LOCALE)
        .long("no-locale")
        .action(ArgAction::Count)
        .help("Disables locale-specific number formatting. Same as /L.")
        .long_help(
            "Disables locale-specific number formatting, so no grouping character is put \
            between thousands. Same as /L.",
        );

    let units = Arg::new(UNITS)
        .long("units")
        .value_name("UNIT")
        .action(ArgAction::Append)
        .value_parser(PossibleValuesParser::new(["b", "k", "m"]))
        .ignore_case(true)
        .help("Sets the unit values are shown in. Same as /U:<unit>.")
        .long_help(indoc! {
            "Sets the unit values are shown in. Same as /U:<unit>, /B and /K.
            If given more than once, the first one wins.

            b   Bytes
            k   Binary kilobytes
            m   Binary megabytes (default)"
        });

    let verbose = Arg::new(VERBOSE)
        .long("verbose")
        .action(ArgAction::Count)
        .help("Shows the full report instead of the total. Same as /V.");

    let config = Arg::new(CONFIG)
        .long("config")
        .value_name("PATH")
        .action(ArgAction::Set)
        .help("Sets the location of the config file.")
        .long_help(
            "Sets the location of the config file. Expects a config file in the TOML format. \
            Unlike the default location, this file must exist.",
        );

    let version = Arg::new("version")
        .long("version")
        .action(ArgAction::Version)
        .help("Prints version information.");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .help_template(TEMPLATE)
        .override_usage(USAGE)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .color(ColorChoice::Auto)
        .args([help, no_locale, units, verbose, config, version])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        build_app().debug_assert();
    }

    #[test]
    fn units_keep_every_occurrence_in_order() {
        let matches = build_app()
            .try_get_matches_from(["mem", "--units=k", "--units", "M", "--units=b"])
            .unwrap();

        let units: Vec<&String> = matches.get_many::<String>(UNITS).unwrap().collect();
        assert_eq!(units, ["k", "M", "b"]);
    }

    #[test]
    fn flags_can_repeat() {
        let matches = build_app()
            .try_get_matches_from(["mem", "--verbose", "--verbose", "--no-locale", "--help"])
            .unwrap();

        assert_eq!(matches.get_count(VERBOSE), 2);
        assert_eq!(matches.get_count(NO_LOCALE), 1);
        assert_eq!(matches.get_count(HELP), 1);
    }

    #[test]
    fn bad_unit_is_rejected() {
        assert!(build_app()
            .try_get_matches_from(["mem", "--units", "g"])
            .is_err());
    }

    #[test]
    fn long_options_match_the_app() {
        let app = build_app();
        let mut longs: Vec<&str> = app.get_arguments().filter_map(|arg| arg.get_long()).collect();
        longs.sort_unstable();

        let mut expected = LONG_OPTIONS.to_vec();
        expected.sort_unstable();
        assert_eq!(longs, expected);
    }

    #[test]
    fn value_options_exist() {
        let app = build_app();
        for option in VALUE_OPTIONS {
            let long = option.trim_start_matches("--");
            assert!(
                app.get_arguments().any(|arg| arg.get_long() == Some(long)),
                "'{option}' is not an argument"
            );
        }
    }
}
