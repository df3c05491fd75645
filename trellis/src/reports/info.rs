//! Info command report data structures.

use super::output::{Output, Report};

/// Report data describing one template.
#[derive(Debug)]
pub struct InfoReport {
    /// The label or slug as given by the user.
    pub requested: String,
    pub label: String,
    pub slug: String,
    pub source_root: String,
    /// Whether logger, exception handler and database modules apply.
    pub python_addons: bool,
    pub base_files: Vec<String>,
    pub features: Vec<FeatureInfo>,
}

/// A feature and the files it adds or replaces.
#[derive(Debug)]
pub struct FeatureInfo {
    pub name: String,
    pub files: Vec<String>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.label);
        if self.requested != self.label && self.requested != self.slug {
            out.warning(&format!(
                "'{}' resolved to the {} template",
                self.requested, self.slug
            ));
        }
        out.key_value("Slug", &self.slug);
        out.key_value("Source root", &self.source_root);
        out.key_value(
            "Logger / exceptions / database",
            if self.python_addons { "supported" } else { "not applicable" },
        );
        out.newline();

        out.section(&format!("Base files ({})", self.base_files.len()));
        for file in &self.base_files {
            out.list_item(file);
        }

        for feature in &self.features {
            out.newline();
            out.section(&format!("{} feature", feature.name));
            for file in &feature.files {
                out.added_item(file);
            }
        }
    }
}
