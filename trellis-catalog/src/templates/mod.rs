//! Bundled template bodies, grouped by category.
//!
//! Larger files live under `templates/<slug>/` in the crate root and are
//! compiled in with `include_str!`; dotfiles and package markers are short
//! enough to keep inline.

use indexmap::IndexMap;
use trellis_core::FileSet;

use crate::TemplateCategory;

/// Expands to a `(path, body)` pair for a file bundled under `templates/`.
macro_rules! bundled {
    ($dir:literal, $path:literal) => {
        (
            $path,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/templates/",
                $dir,
                "/",
                $path
            )),
        )
    };
}

mod desktop;
mod fastapi;
mod mobile;
mod node;
mod python;
mod react;

pub(crate) const PYTHON_GITIGNORE: &str = "\
# Python
__pycache__/
*.py[cod]
*.egg-info/
.pytest_cache/
venv/
.venv/

# Environment
.env

# Logs
logs/
*.log

# IDE
.idea/
.vscode/

# OS
.DS_Store
";

pub(crate) const NODE_GITIGNORE: &str = "\
# Dependencies
node_modules/

# Build output
build/
dist/
coverage/

# Environment
.env
.env.local

# Logs
*.log
npm-debug.log*

# IDE
.idea/
.vscode/

# OS
.DS_Store
";

/// Base file set for a category.
pub(crate) fn base(category: TemplateCategory) -> FileSet {
    match category {
        TemplateCategory::FrontendSpa => react::base(),
        TemplateCategory::BackendNode => node::base(),
        TemplateCategory::BackendAsyncApi => fastapi::base(),
        TemplateCategory::BackendMobile => mobile::base(),
        TemplateCategory::BackendGeneric => python::base(),
        TemplateCategory::DesktopGui => desktop::base(),
    }
}

/// Optional feature fragments for a category, in presentation order.
pub(crate) fn features(category: TemplateCategory) -> IndexMap<String, FileSet> {
    let features: Vec<(&str, FileSet)> = match category {
        TemplateCategory::FrontendSpa | TemplateCategory::BackendGeneric => Vec::new(),
        TemplateCategory::BackendNode => node::features(),
        TemplateCategory::BackendAsyncApi => fastapi::features(),
        TemplateCategory::BackendMobile => mobile::features(),
        TemplateCategory::DesktopGui => desktop::features(),
    };

    features
        .into_iter()
        .map(|(name, files)| (name.to_string(), files))
        .collect()
}
