//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    let mut stdout = std::io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, "expresso", &mut stdout),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, "expresso", &mut stdout),
        Shell::Fish => generate(shells::Fish, &mut cmd, "expresso", &mut stdout),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, "expresso", &mut stdout),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, "expresso", &mut stdout),
    }

    Ok(())
}
