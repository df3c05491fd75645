//! Core utilities and types for the trellis scaffolder.
//!
//! This crate provides the building blocks shared by the catalog and the
//! generation engine: file sets, overlay rules, manifest merging and
//! placeholder substitution.

mod file;
mod fileset;
mod manifest;
mod placeholder;
mod types;

// File operations
pub use file::{File, GeneratedFile, write_file};
// File sets
pub use fileset::{FileSet, MergeFn, OverlayRules};
pub use manifest::{MANIFEST_PATH, merge_manifests};
pub use placeholder::{NAME_PLACEHOLDER, substitute_name};
// Fundamental types
pub use types::DatabaseType;
