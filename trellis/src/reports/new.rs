//! New command report data structures.

use std::path::PathBuf;

use trellis_engine::RepositoryStatus;

use super::output::{Output, Report};

/// Report data from project generation.
#[derive(Debug)]
pub struct NewReport {
    pub project_name: String,
    /// Template label as requested.
    pub template: String,
    /// Slug of the category the label resolved to.
    pub category: String,
    /// Features layered onto the template.
    pub features: Vec<String>,
    /// Requested features the template does not offer.
    pub ignored_features: Vec<String>,
    pub result: GenerationResult,
}

/// Result of project generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the project was written.
#[derive(Debug)]
pub struct WrittenResult {
    pub root: PathBuf,
    pub file_count: usize,
    pub repository: RepositoryStatus,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Directory the project would be created in.
    pub root: PathBuf,
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode, with the project name substituted.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for NewReport {
    fn render(&self, out: &mut dyn Output) {
        for feature in &self.ignored_features {
            out.warning(&format!(
                "feature '{}' is not offered by the {} template and was ignored",
                feature, self.category
            ));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl NewReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "Created {} from {} ({})",
            self.project_name, self.template, self.category
        ));
        out.newline();
        out.key_value("Location", &written.root.display().to_string());
        out.key_value("Files", &written.file_count.to_string());
        if !self.features.is_empty() {
            out.key_value("Features", &self.features.join(", "));
        }

        match &written.repository {
            RepositoryStatus::Initialized => out.key_value("Repository", "initialized"),
            RepositoryStatus::Skipped => out.key_value("Repository", "skipped"),
            RepositoryStatus::Failed(reason) => {
                out.warning(&format!("could not initialize git repository: {}", reason))
            }
        }

        out.newline();
        out.section("Next steps");
        out.list_item(&format!("cd {}", written.root.display()));
        out.list_item("read SETUP.md");
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated in {}, plus the architecture folder and SETUP.md",
            preview.files.len(),
            preview.root.display()
        ));
    }
}
