//! List command report data structures.

use super::output::{Output, Report};

/// Report data listing the catalog.
#[derive(Debug)]
pub struct ListReport {
    pub templates: Vec<TemplateSummary>,
}

/// One template in the catalog.
#[derive(Debug)]
pub struct TemplateSummary {
    pub label: String,
    pub slug: String,
    pub features: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Templates");
        for template in &self.templates {
            out.list_item(&format!("{} ({})", template.label, template.slug));
            for feature in &template.features {
                out.added_item(&format!("    {}", feature));
            }
        }
    }
}
