use std::{
    fmt,
    path::{Path, PathBuf},
};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use trellis_catalog::TemplateCategory;
use trellis_core::DatabaseType;

use crate::{Error, Result};

/// Human-readable template label, e.g. `"FastAPI Core Service"`.
///
/// Any label is accepted; it is classified into a [`TemplateCategory`] by
/// keyword and unknown labels fall back to the generic backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category(&self) -> TemplateCategory {
        TemplateCategory::classify(&self.0)
    }
}

impl From<TemplateCategory> for TemplateId {
    fn from(category: TemplateCategory) -> Self {
        Self::new(category.label())
    }
}

impl From<&str> for TemplateId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Toggles controlling what is added on top of the base template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenerationOptions {
    /// Inject a logger module into Python projects
    pub enable_logger: bool,
    /// Inject an exception-handling module into Python projects
    pub enable_exception_handler: bool,
    /// Database configuration to wire into Python projects
    pub database: DatabaseType,
    /// Feature names to layer on, in selection order
    pub features: IndexSet<String>,
    /// Initialize a git repository with one commit
    pub init_repo: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            enable_logger: true,
            enable_exception_handler: true,
            database: DatabaseType::None,
            features: IndexSet::new(),
            init_repo: true,
        }
    }
}

impl GenerationOptions {
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    pub fn with_database(mut self, database: DatabaseType) -> Self {
        self.database = database;
        self
    }

    pub fn with_init_repo(mut self, init_repo: bool) -> Self {
        self.init_repo = init_repo;
        self
    }
}

/// Everything needed to generate one project.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub template: TemplateId,
    pub project_name: String,
    /// Absolute directory the project folder is created in
    pub output_dir: PathBuf,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// Create a request with default options.
    pub fn new(
        template: impl Into<TemplateId>,
        project_name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template: template.into(),
            project_name: project_name.into(),
            output_dir: output_dir.into(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Directory the project is written to.
    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }

    /// Reject the request if it cannot possibly succeed.
    ///
    /// Only reads filesystem metadata.
    pub fn validate(&self) -> Result<()> {
        validate_project_name(&self.project_name)?;
        validate_output_dir(&self.output_dir)
    }
}

/// Check a project name against `^[A-Za-z0-9_-]+$`.
pub fn validate_project_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(Box::new(Error::InvalidProjectName {
            name: name.to_string(),
        }))
    }
}

fn validate_output_dir(path: &Path) -> Result<()> {
    if !path.is_absolute() {
        return Err(Error::invalid_output(path, "path must be absolute"));
    }

    // A missing directory is fine, it gets created along with the project.
    match std::fs::metadata(path) {
        Ok(meta) if !meta.is_dir() => Err(Error::invalid_output(path, "not a directory")),
        Ok(meta) if meta.permissions().readonly() => {
            Err(Error::invalid_output(path, "directory is read-only"))
        }
        _ => Ok(()),
    }
}
