#![warn(rust_2018_idioms)]

use std::process;

use sysmem::collection::error::CollectionError;

fn main() {
    #[cfg(all(feature = "logging", debug_assertions))]
    {
        if let Err(err) = sysmem::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new(sysmem::constants::DEBUG_LOG_FILE),
        ) {
            eprintln!("Unable to start the debug logger: {err}");
        }
    }

    if let Err(err) = sysmem::run() {
        eprintln!("Error: {err:#}");

        let code = err
            .downcast_ref::<CollectionError>()
            .map_or(1, CollectionError::exit_code);
        process::exit(code);
    }
}
