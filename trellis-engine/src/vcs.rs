//! Version-control initialisation of generated projects.

use std::{fmt, path::Path, process::Command};

/// Error from initialising a repository.
#[derive(Debug)]
pub struct VcsError {
    pub message: String,
    pub output: String,
}

impl fmt::Display for VcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.output.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.message, self.output)
        }
    }
}

impl std::error::Error for VcsError {}

/// Trait for turning a freshly written project into a repository.
pub trait VersionControl {
    /// Initialise a repository at `root`, stage everything and commit it.
    fn init_repository(&self, root: &Path) -> Result<(), VcsError>;
}

/// What happened to the repository step of a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryStatus {
    /// A repository with one commit was created
    Initialized,
    /// Repository initialisation was not requested
    Skipped,
    /// Initialisation was attempted and failed; generation still succeeded
    Failed(String),
}

/// Commit message of the single commit in a generated repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Runs the `git` executable found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    fn run(&self, root: &Path, args: &[&str]) -> Result<(), VcsError> {
        let command = format!("git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(root)
            .output()
            .map_err(|e| VcsError {
                message: format!("failed to run {}", command),
                output: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() { stdout } else { stderr };
            Err(VcsError {
                message: format!("{} failed", command),
                output: detail.trim().to_string(),
            })
        }
    }
}

impl VersionControl for GitCli {
    fn init_repository(&self, root: &Path) -> Result<(), VcsError> {
        self.run(root, &["init"])?;
        self.run(root, &["add", "."])?;
        self.run(root, &["commit", "-m", INITIAL_COMMIT_MESSAGE])
    }
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn init_repository(&self, root: &Path) -> Result<(), VcsError> {
        (**self).init_repository(root)
    }
}
