//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;
pub mod switches;

use std::{fs, path::PathBuf};

use clap::ArgMatches;

pub use self::{
    config::Config,
    error::{OptionError, OptionResult},
};
use crate::{constants::DEFAULT_CONFIG_FILE_PATH, utils::data_units::DisplayUnit};

/// The settings for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemOptions {
    pub unit: DisplayUnit,
    pub verbose: bool,
    pub no_locale: bool,
}

impl MemOptions {
    /// Resolves every setting, with arguments taking priority over the config
    /// file, which takes priority over the defaults.
    pub fn from_matches(matches: &ArgMatches, config: &Config) -> OptionResult<Self> {
        Ok(MemOptions {
            unit: get_unit(matches, config)?,
            verbose: get_verbose(matches, config),
            no_locale: get_no_locale(matches, config),
        })
    }
}

/// Returns the path of the config file to read, if any.
///
/// An explicit path is always returned. The default location is only used if a
/// file is already there.
pub fn get_config_path(config_location: Option<&str>) -> Option<PathBuf> {
    if let Some(conf_loc) = config_location {
        return Some(PathBuf::from(conf_loc));
    }

    dirs::config_dir()
        .map(|path| path.join(DEFAULT_CONFIG_FILE_PATH))
        .filter(|path| path.is_file())
}

/// Reads the config file at `config_path`. No path means the default config.
/// A missing file is never created.
pub fn read_config(config_path: Option<&PathBuf>) -> OptionResult<Config> {
    match config_path {
        Some(path) => {
            let config_string = fs::read_to_string(path).map_err(|err| {
                OptionError::other(format!(
                    "unable to read the config file at '{}': {err}",
                    path.display()
                ))
            })?;
            log::debug!("read config file at {path:?}");

            Ok(toml_edit::de::from_str(&config_string)?)
        }
        None => Ok(Config::default()),
    }
}

fn get_unit(matches: &ArgMatches, config: &Config) -> OptionResult<DisplayUnit> {
    if let Some(mut units) = matches.get_many::<String>(args::UNITS) {
        // The first unit given wins.
        if let Some(unit) = units.next() {
            return unit.parse().map_err(OptionError::other);
        }
    }

    if let Some(flags) = &config.flags {
        if let Some(unit) = &flags.units {
            return unit
                .parse()
                .map_err(|_| OptionError::invalid_config_value("units"));
        }
    }

    Ok(DisplayUnit::default())
}

fn get_verbose(matches: &ArgMatches, config: &Config) -> bool {
    if matches.get_count(args::VERBOSE) > 0 {
        return true;
    } else if let Some(flags) = &config.flags {
        if let Some(verbose) = flags.verbose {
            return verbose;
        }
    }

    false
}

fn get_no_locale(matches: &ArgMatches, config: &Config) -> bool {
    if matches.get_count(args::NO_LOCALE) > 0 {
        return true;
    } else if let Some(flags) = &config.flags {
        if let Some(no_locale) = flags.no_locale {
            return no_locale;
        }
    }

    false
}
