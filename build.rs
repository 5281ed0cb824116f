use std::env;
use std::fs;
use std::io::Error;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::{Shell, generate_to};

#[path = "src/cli_args.rs"]
#[allow(dead_code)]
mod cli_args;

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli_args.rs");

    let Some(out_dir) = env::var_os("OUT_DIR") else {
        return Ok(());
    };
    let out_dir = PathBuf::from(out_dir);

    let mut cmd = cli_args::Cli::command();

    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("pavlette.1"), buffer)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        generate_to(shell, &mut cmd, "pavlette", &out_dir)?;
    }

    Ok(())
}
