use std::fs;

use clap_complete::{generate_to, Shell};

include!("src/cli/cli.rs");

fn main() {
    println!("cargo:rerun-if-changed=src/cli/cli.rs");
    println!("cargo:rerun-if-env-changed=SHELL_COMPLETIONS_DIR");

    let var = std::env::var_os("SHELL_COMPLETIONS_DIR").or_else(|| std::env::var_os("OUT_DIR"));
    let outdir = match var {
        None => return,
        Some(outdir) => outdir,
    };
    fs::create_dir_all(&outdir).unwrap();

    let mut cmd = build_cli();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        generate_to(shell, &mut cmd, crate_name!(), &outdir).unwrap();
    }
}
