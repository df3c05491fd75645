use indexmap::IndexMap;
use trellis_core::FileSet;

use crate::{SourceLayout, TemplateCategory, templates};

/// A category's base files and optional feature fragments.
#[derive(Debug, Clone)]
pub struct Template {
    category: TemplateCategory,
    layout: SourceLayout,
    base: FileSet,
    features: IndexMap<String, FileSet>,
}

impl Template {
    /// Create a template with no features.
    pub fn new(category: TemplateCategory, base: FileSet) -> Self {
        Self {
            category,
            layout: category.layout(),
            base,
            features: IndexMap::new(),
        }
    }

    /// Add a named feature fragment.
    pub fn with_feature(mut self, name: impl Into<String>, files: FileSet) -> Self {
        self.features.insert(name.into(), files);
        self
    }

    fn bundled(category: TemplateCategory) -> Self {
        Self {
            features: templates::features(category),
            ..Self::new(category, templates::base(category))
        }
    }

    pub fn category(&self) -> TemplateCategory {
        self.category
    }

    pub fn layout(&self) -> SourceLayout {
        self.layout
    }

    /// The base file set. Callers compose on a clone of it.
    pub fn base(&self) -> &FileSet {
        &self.base
    }

    pub fn features(&self) -> &IndexMap<String, FileSet> {
        &self.features
    }

    /// Look up a feature fragment by its exact name.
    pub fn feature(&self, name: &str) -> Option<&FileSet> {
        self.features.get(name)
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }
}

/// Immutable set of templates keyed by category.
///
/// Lookups never fail: a category without a template resolves to the
/// fallback template.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: IndexMap<TemplateCategory, Template>,
    fallback: Template,
}

impl Catalog {
    /// Create a catalog containing only `fallback`.
    pub fn new(fallback: Template) -> Self {
        Self {
            templates: IndexMap::new(),
            fallback,
        }
    }

    /// Add a template, replacing any existing one for the same category.
    pub fn with_template(mut self, template: Template) -> Self {
        if template.category == self.fallback.category {
            self.fallback = template;
        } else {
            self.templates.insert(template.category, template);
        }
        self
    }

    /// The catalog of templates bundled with this crate.
    pub fn builtin() -> Self {
        TemplateCategory::ALL.into_iter().fold(
            Catalog::new(Template::bundled(TemplateCategory::FALLBACK)),
            |catalog, category| match category {
                TemplateCategory::FALLBACK => catalog,
                _ => catalog.with_template(Template::bundled(category)),
            },
        )
    }

    /// Get the template registered for exactly this category.
    pub fn get(&self, category: TemplateCategory) -> Option<&Template> {
        if category == self.fallback.category {
            return Some(&self.fallback);
        }
        self.templates.get(&category)
    }

    /// Get the template for a category, falling back when none is registered.
    pub fn resolve(&self, category: TemplateCategory) -> &Template {
        self.get(category).unwrap_or(&self.fallback)
    }

    /// Feature fragments available for a category.
    pub fn features(&self, category: TemplateCategory) -> &IndexMap<String, FileSet> {
        self.resolve(category).features()
    }

    /// Iterate over all templates, fallback last.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates
            .values()
            .chain(std::iter::once(&self.fallback))
    }
}
