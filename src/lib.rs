//! `sysmem` reports how much memory a system has, and how much of it a process
//! could get at, through the `mem` binary.

#![warn(rust_2018_idioms)]

pub mod collection;
pub mod constants;
pub mod options;
pub mod report;

pub mod utils {
    pub mod data_units;
    pub mod locale;
    pub mod logging;
    pub mod strings;
}

use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    iter,
};

use anyhow::{Context, Result};

use crate::{
    collection::{extended, memory},
    options::{args, switches::{normalize_args, wants_help}, MemOptions},
    utils::{locale, strings::program_name},
};

/// Runs `mem` with the arguments of the current process.
pub fn run() -> Result<()> {
    let mut argv = env::args_os();
    let program = program_name(argv.next().as_deref());

    let normalized = normalize_args(argv);
    if wants_help(&normalized) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(constants::help_text(&program).as_bytes())?;
        out.flush()?;

        return Ok(());
    }

    let matches = args::build_app()
        .get_matches_from(iter::once(OsString::from(constants::PROGRAM_NAME)).chain(normalized));

    let config_path =
        options::get_config_path(matches.get_one::<String>(args::CONFIG).map(String::as_str));
    let config = options::read_config(config_path.as_ref())
        .context("Unable to properly parse the config file.")?;
    let opts = MemOptions::from_matches(&matches, &config)?;
    log::debug!("running with {opts:?}");

    let snapshot = memory::query_snapshot(
        &mut memory::PlatformSource::new(),
        extended::open_platform_device,
    )?;

    let lang = env::var(locale::LANG_ENV).ok();
    let separator = locale::grouping_separator(opts.no_locale, lang.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &snapshot, &opts, &separator)?;
    out.flush()?;

    Ok(())
}
