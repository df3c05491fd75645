//! Built-in template catalog for the trellis scaffolder.
//!
//! The catalog is plain data: a base [`FileSet`](trellis_core::FileSet) per
//! [`TemplateCategory`] plus named feature fragments that can be layered on
//! top of it. Nothing here touches the filesystem except the
//! [`addons`] architecture files, which implement
//! [`GeneratedFile`](trellis_core::GeneratedFile).
//!
//! ```
//! use trellis_catalog::{Catalog, TemplateCategory};
//!
//! let catalog = Catalog::builtin();
//! let category = TemplateCategory::classify("FastAPI Core Service");
//! let template = catalog.resolve(category);
//!
//! assert_eq!(template.layout().source_root(), "app");
//! assert!(template.feature("PostgreSQL").is_some());
//! ```

pub mod addons;
mod catalog;
mod category;
mod layout;
mod templates;

pub use catalog::{Catalog, Template};
pub use category::{CLASSIFICATION_RULES, TemplateCategory};
pub use layout::SourceLayout;
