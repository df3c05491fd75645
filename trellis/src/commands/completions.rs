use std::{fs, io, path::PathBuf};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Context, Result};

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cmd = Cli::command();
        match &self.output {
            Some(path) => {
                let mut file = fs::File::create(path)
                    .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
                clap_complete::generate(self.shell, &mut cmd, "trellis", &mut file);
            }
            None => clap_complete::generate(self.shell, &mut cmd, "trellis", &mut io::stdout()),
        }
        Ok(())
    }
}
