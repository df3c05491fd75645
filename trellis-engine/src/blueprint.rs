//! Pure composition of a project's file set.

use trellis_catalog::{
    Catalog, SourceLayout, TemplateCategory,
    addons::{self, CORE_INIT, DB_INIT, EXCEPTIONS_MODULE, LOGGER_MODULE},
};
use trellis_core::{FileSet, OverlayRules};

use crate::{GenerationOptions, TemplateId};

/// The fully composed file set for a request, before placeholder
/// substitution.
///
/// Composing never touches the filesystem, so a blueprint doubles as a
/// preview of what generation would write.
#[derive(Debug, Clone)]
pub struct Blueprint {
    template: TemplateId,
    category: TemplateCategory,
    layout: SourceLayout,
    files: FileSet,
    applied_features: Vec<String>,
    ignored_features: Vec<String>,
}

impl Blueprint {
    /// Compose the file set for `template` with `options`.
    ///
    /// The base files are copied, selected features are layered on in
    /// selection order with `requirements.txt` merged, and for Python
    /// categories the logger, exception handler and database modules are
    /// spliced in. Injected core modules never replace a module the template
    /// already ships; database files always replace template files.
    pub fn compose(catalog: &Catalog, template: &TemplateId, options: &GenerationOptions) -> Self {
        let category = template.category();
        let resolved = catalog.resolve(category);
        let layout = resolved.layout();
        let rules = OverlayRules::manifests();

        let mut files = resolved.base().clone();
        let mut applied_features = Vec::new();
        let mut ignored_features = Vec::new();

        for name in &options.features {
            match resolved.feature(name) {
                Some(fragment) => {
                    files.overlay(fragment, &rules);
                    applied_features.push(name.clone());
                }
                None => ignored_features.push(name.clone()),
            }
        }

        if category.accepts_python_addons() {
            if options.enable_logger {
                files.insert_if_absent(layout.core_path("__init__.py"), CORE_INIT);
                files.insert_if_absent(layout.core_path("logger.py"), LOGGER_MODULE);
            }
            if options.enable_exception_handler {
                files.insert_if_absent(layout.core_path("exceptions.py"), EXCEPTIONS_MODULE);
            }
            if let (Some(env), Some(module)) = (
                addons::database_env(options.database),
                addons::database_module(options.database),
            ) {
                files.insert(".env", env);
                files.insert(layout.db_path("__init__.py"), DB_INIT);
                files.insert(layout.db_path("database.py"), module);
            }
        }

        Self {
            template: template.clone(),
            category,
            layout,
            files,
            applied_features,
            ignored_features,
        }
    }

    pub fn template(&self) -> &TemplateId {
        &self.template
    }

    pub fn category(&self) -> TemplateCategory {
        self.category
    }

    pub fn layout(&self) -> SourceLayout {
        self.layout
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    /// Features that were recognised and layered on, in order.
    pub fn applied_features(&self) -> &[String] {
        &self.applied_features
    }

    /// Requested features the template does not offer.
    pub fn ignored_features(&self) -> &[String] {
        &self.ignored_features
    }
}
