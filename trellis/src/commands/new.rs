use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use tracing::debug;
use trellis_catalog::{Catalog, TemplateCategory};
use trellis_core::DatabaseType;
use trellis_engine::{GenerationOptions, GenerationRequest, Preset, TemplateId, validate_project_name};

use super::{UnwrapOrExit, parse_template};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    /// Project name (letters, digits, '_' and '-')
    pub name: String,

    /// Template slug (react, node, fastapi, mobile, desktop, python) or label
    #[arg(short, long)]
    pub template: Option<String>,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Database to configure for Python templates
    #[arg(short, long)]
    pub database: Option<DatabaseType>,

    /// Optional feature to include; repeat for several
    #[arg(short = 'f', long = "feature")]
    pub features: Vec<String>,

    /// Do not add a logger module
    #[arg(long)]
    pub no_logger: bool,

    /// Do not add an exception-handling module
    #[arg(long)]
    pub no_exception_handler: bool,

    /// Do not initialize a git repository
    #[arg(long)]
    pub no_git: bool,

    /// TOML preset providing the template and default options
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Preview the files that would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        validate_project_name(&self.name).unwrap_or_exit();

        let preset = match &self.preset {
            Some(path) => Preset::from_file(path).unwrap_or_exit(),
            None => Preset::default(),
        };
        let template = match (&self.template, preset.template.clone()) {
            (Some(value), _) => parse_template(value),
            (None, Some(template)) => template,
            (None, None) => Self::prompt_template()?,
        };
        let output_dir = Self::resolve_output(self.output.clone())?;
        let options = self.options(preset.options);

        let request = GenerationRequest::new(template, &self.name, output_dir).with_options(options);
        debug!(?request, dry_run = self.dry_run, "resolved request");
        let catalog = Catalog::builtin();

        let report = if self.dry_run {
            ops::preview(&catalog, &request).unwrap_or_exit()
        } else {
            ops::generate(&catalog, &request).unwrap_or_exit()
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Layer command-line flags over the preset's options.
    fn options(&self, mut options: GenerationOptions) -> GenerationOptions {
        if self.no_logger {
            options.enable_logger = false;
        }
        if self.no_exception_handler {
            options.enable_exception_handler = false;
        }
        if self.no_git {
            options.init_repo = false;
        }
        if let Some(database) = self.database {
            options.database = database;
        }
        options.features.extend(self.features.iter().cloned());
        options
    }

    fn prompt_template() -> Result<TemplateId> {
        let labels: Vec<_> = TemplateCategory::ALL.iter().map(|c| c.label()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a template")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get template selection")?;

        Ok(TemplateCategory::ALL[selection].into())
    }

    fn resolve_output(output: Option<PathBuf>) -> Result<PathBuf> {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        Ok(match output {
            Some(path) if path.is_absolute() => path,
            Some(path) => cwd.join(path),
            None => cwd,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        new: NewCommand,
    }

    fn parse(args: &[&str]) -> NewCommand {
        let argv = std::iter::once("new").chain(args.iter().copied());
        Harness::try_parse_from(argv).unwrap().new
    }

    #[test]
    fn test_flags_override_preset() {
        let cmd = parse(&[
            "demo",
            "--no-logger",
            "--no-git",
            "-d",
            "postgres",
            "-f",
            "Rate Limiting",
            "--feature",
            "File Storage",
        ]);
        let preset = GenerationOptions::default()
            .with_database(DatabaseType::Mongodb)
            .with_feature("Push Notifications");

        let options = cmd.options(preset);

        assert!(!options.enable_logger);
        assert!(options.enable_exception_handler);
        assert!(!options.init_repo);
        assert_eq!(options.database, DatabaseType::Postgresql);
        assert_eq!(
            options.features.iter().collect::<Vec<_>>(),
            ["Push Notifications", "Rate Limiting", "File Storage"]
        );
    }

    #[test]
    fn test_preset_kept_without_flags() {
        let cmd = parse(&["demo"]);
        let preset = GenerationOptions::default()
            .with_database(DatabaseType::Mongodb)
            .with_init_repo(false);

        assert_eq!(cmd.options(preset.clone()), preset);
    }

    #[test]
    fn test_rejects_unknown_database() {
        let argv = ["new", "demo", "--database", "mysql"];
        assert!(Harness::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_resolve_output() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(NewCommand::resolve_output(None).unwrap(), cwd);
        assert_eq!(
            NewCommand::resolve_output(Some("out".into())).unwrap(),
            cwd.join("out")
        );
        let absolute = cwd.join("abs");
        assert_eq!(
            NewCommand::resolve_output(Some(absolute.clone())).unwrap(),
            absolute
        );
    }
}
