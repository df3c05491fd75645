//! Project generation for the trellis scaffolder.
//!
//! A [`GenerationRequest`] names a template, a project name, an output
//! directory and a set of [`GenerationOptions`]. The [`Generator`] composes
//! a [`Blueprint`] from the catalog, writes it to disk with the project name
//! substituted, initialises a repository and finishes with a `SETUP.md`
//! guide.
//!
//! ```no_run
//! use trellis_catalog::Catalog;
//! use trellis_engine::{GenerationOptions, GenerationRequest, Generator};
//! use trellis_core::DatabaseType;
//!
//! let catalog = Catalog::builtin();
//! let request = GenerationRequest::new("FastAPI Core Service", "inventory", "/tmp/projects")
//!     .with_options(GenerationOptions::default().with_database(DatabaseType::Postgresql));
//!
//! let project = Generator::new(&catalog).generate(&request)?;
//! println!("created {}", project.root.display());
//! # Ok::<(), Box<trellis_engine::Error>>(())
//! ```

mod blueprint;
mod error;
mod generator;
mod preset;
mod request;
mod setup_guide;
mod vcs;

pub use blueprint::Blueprint;
pub use error::{Error, Result};
pub use generator::{GeneratedProject, Generator};
pub use preset::Preset;
pub use request::{GenerationOptions, GenerationRequest, TemplateId, validate_project_name};
pub use setup_guide::{SETUP_GUIDE_PATH, SetupGuide};
pub use vcs::{GitCli, INITIAL_COMMIT_MESSAGE, RepositoryStatus, VcsError, VersionControl};
