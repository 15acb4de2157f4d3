//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    match args.shell {
        Shell::Bash => write_script(shells::Bash, &mut io::stdout()),
        Shell::Zsh => write_script(shells::Zsh, &mut io::stdout()),
        Shell::Fish => write_script(shells::Fish, &mut io::stdout()),
        Shell::PowerShell => write_script(shells::PowerShell, &mut io::stdout()),
        Shell::Elvish => write_script(shells::Elvish, &mut io::stdout()),
    }
    Ok(())
}

fn write_script<G: Generator>(shell: G, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}
