use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::SourceLayout;

/// The closed set of project archetypes the catalog knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum TemplateCategory {
    /// React single-page web application
    #[serde(rename = "react")]
    FrontendSpa,
    /// Express service on Node.js
    #[serde(rename = "node")]
    BackendNode,
    /// FastAPI service
    #[serde(rename = "fastapi")]
    BackendAsyncApi,
    /// REST backend for mobile clients
    #[serde(rename = "mobile")]
    BackendMobile,
    /// Plain Python service, used when nothing else matches
    #[serde(rename = "python")]
    BackendGeneric,
    /// PySide6 desktop application
    #[serde(rename = "desktop")]
    DesktopGui,
}

/// Keyword rules used by [`TemplateCategory::classify`], in priority order.
///
/// Matching is a case-sensitive substring test and the first rule that
/// matches wins.
pub const CLASSIFICATION_RULES: &[(&str, TemplateCategory)] = &[
    ("React", TemplateCategory::FrontendSpa),
    ("Node.js", TemplateCategory::BackendNode),
    ("Desktop", TemplateCategory::DesktopGui),
    ("FastAPI", TemplateCategory::BackendAsyncApi),
    ("Mobile", TemplateCategory::BackendMobile),
];

impl TemplateCategory {
    /// Every category, in the order they are presented to users.
    pub const ALL: [TemplateCategory; 6] = [
        TemplateCategory::FrontendSpa,
        TemplateCategory::BackendNode,
        TemplateCategory::BackendAsyncApi,
        TemplateCategory::BackendMobile,
        TemplateCategory::DesktopGui,
        TemplateCategory::BackendGeneric,
    ];

    /// The category used when a label matches no keyword.
    pub const FALLBACK: TemplateCategory = TemplateCategory::BackendGeneric;

    /// Classify a human-readable template label.
    pub fn classify(label: &str) -> Self {
        CLASSIFICATION_RULES
            .iter()
            .find(|(keyword, _)| label.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(Self::FALLBACK)
    }

    /// Short identifier used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            TemplateCategory::FrontendSpa => "react",
            TemplateCategory::BackendNode => "node",
            TemplateCategory::BackendAsyncApi => "fastapi",
            TemplateCategory::BackendMobile => "mobile",
            TemplateCategory::BackendGeneric => "python",
            TemplateCategory::DesktopGui => "desktop",
        }
    }

    /// Canonical human-readable label. Classifying it yields `self`.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::FrontendSpa => "React Web Dashboard",
            TemplateCategory::BackendNode => "Node.js Application",
            TemplateCategory::BackendAsyncApi => "FastAPI Core Service",
            TemplateCategory::BackendMobile => "Mobile App Backend",
            TemplateCategory::BackendGeneric => "Python Core Service",
            TemplateCategory::DesktopGui => "Desktop Application",
        }
    }

    /// Where injected modules go for this category.
    pub fn layout(&self) -> SourceLayout {
        match self {
            TemplateCategory::FrontendSpa | TemplateCategory::BackendNode => SourceLayout::new("src"),
            _ => SourceLayout::new("app"),
        }
    }

    /// Whether the category receives the Python logger, exception handler
    /// and database modules.
    ///
    /// JavaScript ecosystems never do.
    pub fn accepts_python_addons(&self) -> bool {
        !matches!(
            self,
            TemplateCategory::FrontendSpa | TemplateCategory::BackendNode
        )
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateCategory::ALL
            .into_iter()
            .find(|category| category.slug() == s.to_lowercase())
            .ok_or_else(|| {
                let slugs: Vec<_> = TemplateCategory::ALL.iter().map(|c| c.slug()).collect();
                format!(
                    "unknown template '{}', expected one of: {}",
                    s,
                    slugs.join(", ")
                )
            })
    }
}
