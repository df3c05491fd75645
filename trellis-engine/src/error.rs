use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid project name '{name}'")]
    #[diagnostic(
        code(trellis::invalid_project_name),
        help("project names may only contain letters, digits, '_' and '-'")
    )]
    InvalidProjectName { name: String },

    #[error("cannot generate into '{path}': {reason}")]
    #[diagnostic(code(trellis::invalid_output_directory))]
    InvalidOutputDirectory { path: PathBuf, reason: String },

    #[error("failed to prepare project directory '{path}'")]
    #[diagnostic(
        code(trellis::prepare_output),
        help("check that the directory is not open in another program and that you can write to its parent")
    )]
    PrepareOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(
        code(trellis::write_file),
        help("the project directory was left partially written")
    )]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read preset '{path}'")]
    PresetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset")]
    #[diagnostic(code(trellis::preset_parse))]
    PresetParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn invalid_output(path: impl Into<PathBuf>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidOutputDirectory {
            path: path.into(),
            reason: reason.into(),
        })
    }

    pub(crate) fn prepare_output(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::PrepareOutput {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::WriteFile {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error with source context
    pub(crate) fn preset_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::PresetParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// The request was rejected before anything touched the filesystem.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Error::InvalidProjectName { .. } | Error::InvalidOutputDirectory { .. }
        )
    }

    /// The project directory could not be cleared or created.
    pub fn is_output_preparation(&self) -> bool {
        matches!(self, Error::PrepareOutput { .. })
    }

    /// A file inside the project could not be written.
    pub fn is_file_write(&self) -> bool {
        matches!(self, Error::WriteFile { .. })
    }
}
