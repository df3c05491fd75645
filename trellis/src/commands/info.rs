use clap::Args;
use eyre::Result;
use trellis_catalog::Catalog;

use super::parse_template;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Template slug or label
    pub template: String,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let catalog = Catalog::builtin();
        let template = parse_template(&self.template);

        let report = ops::info(&catalog, &template);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
