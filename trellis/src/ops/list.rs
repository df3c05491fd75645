//! List operation - catalog overview.

use trellis_catalog::Catalog;

use crate::reports::{ListReport, TemplateSummary};

/// Summarise every template in the catalog.
pub fn list(catalog: &Catalog) -> ListReport {
    let templates = catalog
        .templates()
        .map(|template| {
            let category = template.category();
            TemplateSummary {
                label: category.label().to_string(),
                slug: category.slug().to_string(),
                features: template.feature_names().map(str::to_string).collect(),
            }
        })
        .collect();

    ListReport { templates }
}
