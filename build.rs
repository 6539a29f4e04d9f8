//! General build script used by mem to generate completion files and a manpage.

#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

const COMPLETION_DIR: &str = "./target/tmp/mem/completion/";
const MANPAGE_DIR: &str = "./target/tmp/mem/manpage/";

const ENV_KEY: &str = "MEM_GENERATE";

fn create_dir(dir: &Path) -> io::Result<()> {
    let res = fs::create_dir_all(dir);
    match &res {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Failed to create a directory at location {dir:?}, encountered error {err:?}.  Aborting...");
        }
    }

    res
}

fn generate() -> io::Result<()> {
    if env::var_os(ENV_KEY).is_some() {
        let completion_out_dir = PathBuf::from(COMPLETION_DIR);
        let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

        create_dir(&completion_out_dir)?;
        create_dir(&manpage_out_dir)?;

        // Generate completions
        let mut app = args::build_app();
        generate_to(Shell::Bash, &mut app, "mem", &completion_out_dir)?;
        generate_to(Shell::Zsh, &mut app, "mem", &completion_out_dir)?;
        generate_to(Shell::Fish, &mut app, "mem", &completion_out_dir)?;
        generate_to(Shell::PowerShell, &mut app, "mem", &completion_out_dir)?;
        generate_to(Shell::Elvish, &mut app, "mem", &completion_out_dir)?;

        // Generate manpage
        let app = app.name("mem");
        let man = Man::new(app);
        let mut buffer: Vec<u8> = Default::default();
        man.render(&mut buffer)?;
        fs::write(manpage_out_dir.join("mem.1"), buffer)?;
    }

    Ok(())
}

fn main() -> io::Result<()> {
    generate()?;

    println!("cargo:rerun-if-env-changed={ENV_KEY}");
    println!("cargo:rerun-if-changed=src/options/args.rs");

    Ok(())
}
