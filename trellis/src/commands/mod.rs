mod completions;
mod info;
mod list;
mod new;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use info::InfoCommand;
use list::ListCommand;
use new::NewCommand;
use trellis_catalog::TemplateCategory;
use trellis_engine::TemplateId;

/// Extension trait for exiting on engine errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for trellis_engine::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Interpret a `--template` value: a slug such as `fastapi`, or any label.
///
/// Labels are classified by keyword, so unknown labels select the generic
/// Python template.
pub(crate) fn parse_template(value: &str) -> TemplateId {
    match value.parse::<TemplateCategory>() {
        Ok(category) => category.into(),
        Err(_) => TemplateId::new(value),
    }
}

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version)]
#[command(about = "Scaffold starter projects from built-in templates")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new project
    New(NewCommand),

    /// List available templates and their features
    List(ListCommand),

    /// Show the files a template and its features provide
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
