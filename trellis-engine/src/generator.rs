use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};
use trellis_catalog::{Catalog, addons};
use trellis_core::{File, GeneratedFile, substitute_name};

use crate::{
    Blueprint, Error, GenerationRequest, Result, SetupGuide,
    vcs::{GitCli, RepositoryStatus, VersionControl},
};

/// Outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    /// Absolute path of the project directory
    pub root: PathBuf,
    /// Every file written, relative to `root`, in write order
    pub files: Vec<String>,
    pub repository: RepositoryStatus,
}

/// Writes projects described by [`GenerationRequest`]s.
///
/// A generator only borrows the catalog, so one instance can serve
/// concurrent requests as long as they target different directories.
pub struct Generator<'a, V = GitCli> {
    catalog: &'a Catalog,
    vcs: V,
}

impl<'a> Generator<'a, GitCli> {
    /// Create a generator that initialises repositories with `git`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            vcs: GitCli,
        }
    }
}

impl<'a, V: VersionControl> Generator<'a, V> {
    /// Replace the version-control backend.
    pub fn with_version_control<W: VersionControl>(self, vcs: W) -> Generator<'a, W> {
        Generator {
            catalog: self.catalog,
            vcs,
        }
    }

    /// Compose the request's file set without writing anything.
    pub fn compose(&self, request: &GenerationRequest) -> Blueprint {
        Blueprint::compose(self.catalog, &request.template, &request.options)
    }

    /// Generate the project, replacing any existing directory of the same
    /// name.
    ///
    /// Invalid requests are rejected before the filesystem is touched. A
    /// failed write leaves the partially written project in place.
    /// Repository failures are logged and reported through
    /// [`GeneratedProject::repository`], never as an error.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedProject> {
        request.validate()?;

        let name = request.project_name.as_str();
        let blueprint = self.compose(request);
        info!(
            project = name,
            template = %request.template,
            category = %blueprint.category(),
            "generating project"
        );
        for feature in blueprint.ignored_features() {
            debug!(feature = %feature, "ignoring feature not offered by template");
        }

        let root = request.project_root();
        prepare_output(&root)?;

        let mut written = Vec::with_capacity(blueprint.files().len() + 3);

        for file in addons::architecture_scaffold() {
            let path = file
                .write(&root)
                .map_err(|e| Error::write_file(file.path(&root), e))?;
            written.push(relative(&root, &path));
        }

        for (rel, content) in blueprint.files().iter() {
            let path = root.join(rel);
            File::new(&path, substitute_name(content, name))
                .write()
                .map_err(|e| Error::write_file(&path, e))?;
            debug!(file = rel, "created");
            written.push(rel.to_string());
        }

        let repository = if request.options.init_repo {
            match self.vcs.init_repository(&root) {
                Ok(()) => {
                    info!("initialized repository");
                    RepositoryStatus::Initialized
                }
                Err(e) => {
                    warn!(error = %e, "could not initialize repository");
                    RepositoryStatus::Failed(e.to_string())
                }
            }
        } else {
            RepositoryStatus::Skipped
        };

        let guide = SetupGuide::new(name, &blueprint, &request.options);
        let path = guide
            .write(&root)
            .map_err(|e| Error::write_file(guide.path(&root), e))?;
        written.push(relative(&root, &path));

        info!(root = %root.display(), files = written.len(), "project generated");
        Ok(GeneratedProject {
            root,
            files: written,
            repository,
        })
    }
}

/// Remove whatever exists at `root` and create it as an empty directory.
fn prepare_output(root: &Path) -> Result<()> {
    let removed = match fs::symlink_metadata(root) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(root).map(|_| true),
        Ok(_) => fs::remove_file(root).map(|_| true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
    .map_err(|e| Error::prepare_output(root, e))?;

    if removed {
        debug!(root = %root.display(), "removed existing project directory");
    }
    fs::create_dir_all(root).map_err(|e| Error::prepare_output(root, e))
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_prepare_output_replaces_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("demo");
        fs::create_dir_all(root.join("old/nested")).unwrap();
        fs::write(root.join("old/nested/file.txt"), "stale").unwrap();

        prepare_output(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn test_prepare_output_replaces_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("demo");
        fs::write(&root, "not a directory").unwrap();

        prepare_output(&root).unwrap();

        assert!(root.is_dir());
    }

    #[test]
    fn test_prepare_output_fails_under_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blocker"), "").unwrap();

        let err = prepare_output(&temp.path().join("blocker/demo")).unwrap_err();
        assert!(err.is_output_preparation());
    }

    #[test]
    fn test_relative() {
        let root = Path::new("/out/demo");
        assert_eq!(relative(root, &root.join("app").join("main.py")), "app/main.py");
        assert_eq!(relative(root, &root.join("SETUP.md")), "SETUP.md");
    }
}
