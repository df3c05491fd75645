use clap::Args;
use eyre::Result;
use trellis_catalog::Catalog;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Only print template slugs, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let catalog = Catalog::builtin();
        let report = ops::list(&catalog);

        if self.quiet {
            for template in &report.templates {
                println!("{}", template.slug);
            }
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
