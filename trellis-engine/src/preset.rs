//! Reusable generation presets stored as TOML.
//!
//! ```toml
//! template = "FastAPI Core Service"
//!
//! [options]
//! database = "postgresql"
//! features = ["PostgreSQL"]
//! init-repo = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{Error, GenerationOptions, Result, TemplateId};

/// A saved template choice and set of options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Template to use when none is given on the command line
    #[serde(default)]
    pub template: Option<TemplateId>,
    /// Options, with unspecified fields at their defaults
    #[serde(default)]
    pub options: GenerationOptions,
}

impl Preset {
    /// Read and parse a preset file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::PresetRead {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a preset, using `filename` in error reports.
    pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::preset_parse(e, content, filename))
    }
}
