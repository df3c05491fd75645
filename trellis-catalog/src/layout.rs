/// Directory conventions for a template category.
///
/// Only the generation engine consults this, to decide where the logger,
/// exception handler and database modules are injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLayout {
    source_root: &'static str,
}

impl SourceLayout {
    pub const fn new(source_root: &'static str) -> Self {
        Self { source_root }
    }

    /// Top-level source folder, e.g. `app` or `src`.
    pub fn source_root(&self) -> &'static str {
        self.source_root
    }

    /// Path of a file inside the core-code folder.
    pub fn core_path(&self, file: &str) -> String {
        format!("{}/core/{}", self.source_root, file)
    }

    /// Path of a file inside the database package.
    pub fn db_path(&self, file: &str) -> String {
        format!("{}/db/{}", self.source_root, file)
    }
}
