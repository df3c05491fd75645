//! Info operation - what a template provides.

use trellis_catalog::Catalog;
use trellis_engine::TemplateId;

use crate::reports::{FeatureInfo, InfoReport};

/// Describe the template a label or slug resolves to.
pub fn info(catalog: &Catalog, template: &TemplateId) -> InfoReport {
    let category = template.category();
    let resolved = catalog.resolve(category);

    InfoReport {
        requested: template.to_string(),
        label: category.label().to_string(),
        slug: category.slug().to_string(),
        source_root: resolved.layout().source_root().to_string(),
        python_addons: category.accepts_python_addons(),
        base_files: resolved.base().paths().map(str::to_string).collect(),
        features: resolved
            .features()
            .iter()
            .map(|(name, files)| FeatureInfo {
                name: name.clone(),
                files: files.paths().map(str::to_string).collect(),
            })
            .collect(),
    }
}
