//! Ordered path-to-content mappings and the rules for layering them.

use indexmap::IndexMap;

use crate::manifest::{MANIFEST_PATH, merge_manifests};

/// Function used to combine an existing file body with an incoming one.
pub type MergeFn = fn(&str, &str) -> String;

/// A set of files keyed by forward-slash relative path.
///
/// Insertion order is preserved so that generated trees and previews are
/// reproducible. Writing an existing path replaces its content in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: IndexMap<String, String>,
}

impl FileSet {
    /// Create an empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a file.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Insert a file only when the path is not already present.
    ///
    /// Returns `true` if the file was added.
    pub fn insert_if_absent(&mut self, path: impl Into<String>, content: impl Into<String>) -> bool {
        let path = path.into();
        if self.files.contains_key(&path) {
            return false;
        }
        self.files.insert(path, content.into());
        true
    }

    /// Builder-style insert.
    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Builder-style insert of many files.
    pub fn with_all<P, C>(mut self, files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<String>,
        C: Into<String>,
    {
        self.extend(files);
        self
    }

    /// Get the content of a file.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Check whether a path is present.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the set has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Iterate over `(path, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// Layer `fragment` on top of this set.
    ///
    /// Paths with a merge rule are combined with the existing content (an
    /// absent entry counts as empty); every other path is overwritten.
    pub fn overlay(&mut self, fragment: &FileSet, rules: &OverlayRules) {
        for (path, content) in fragment.iter() {
            match rules.merge_fn(path) {
                Some(merge) => {
                    let existing = self.get(path).unwrap_or("");
                    let merged = merge(existing, content);
                    self.insert(path, merged);
                }
                None => self.insert(path, content),
            }
        }
    }
}

impl<P: Into<String>, C: Into<String>> Extend<(P, C)> for FileSet {
    fn extend<I: IntoIterator<Item = (P, C)>>(&mut self, iter: I) {
        for (path, content) in iter {
            self.insert(path, content);
        }
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for FileSet {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut set = FileSet::new();
        set.extend(iter);
        set
    }
}

/// Declarative description of which paths merge instead of overwrite.
#[derive(Debug, Clone, Default)]
pub struct OverlayRules {
    mergeable: IndexMap<String, MergeFn>,
}

impl OverlayRules {
    /// Rules where every path overwrites.
    pub fn overwrite_all() -> Self {
        Self::default()
    }

    /// Rules that merge the dependency manifest and overwrite everything else.
    pub fn manifests() -> Self {
        Self::default().merge(MANIFEST_PATH, merge_manifests)
    }

    /// Register a mergeable path.
    pub fn merge(mut self, path: impl Into<String>, merge: MergeFn) -> Self {
        self.mergeable.insert(path.into(), merge);
        self
    }

    /// Get the merge function for a path, if the path is mergeable.
    pub fn merge_fn(&self, path: &str) -> Option<MergeFn> {
        self.mergeable.get(path).copied()
    }

    /// Iterate over mergeable paths.
    pub fn mergeable_paths(&self) -> impl Iterator<Item = &str> {
        self.mergeable.keys().map(String::as_str)
    }
}
