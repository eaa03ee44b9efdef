//! Static project-category taxonomy.
//!
//! Categories are configuration, not derived data: the declaration order of
//! [`ProjectCategory::ALL`] is the match-priority order, and the keyword
//! tables can be edited without touching the classifier.

use serde::Serialize;

/// Project gallery categories, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    DataScience,
    WebDevelopment,
    MobileDevelopment,
    #[serde(rename = "devops")]
    DevOps,
    LowLevel,
    /// Catch-all bucket; matched by no keyword.
    Other,
}

impl ProjectCategory {
    /// All categories in match-priority order, `Other` last.
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::DataScience,
        ProjectCategory::WebDevelopment,
        ProjectCategory::MobileDevelopment,
        ProjectCategory::DevOps,
        ProjectCategory::LowLevel,
        ProjectCategory::Other,
    ];

    /// Stable key used in serialized output and view routing.
    pub fn key(&self) -> &'static str {
        match self {
            ProjectCategory::DataScience => "data-science",
            ProjectCategory::WebDevelopment => "web-development",
            ProjectCategory::MobileDevelopment => "mobile-development",
            ProjectCategory::DevOps => "devops",
            ProjectCategory::LowLevel => "low-level",
            ProjectCategory::Other => "other",
        }
    }

    /// Display name shown on the gallery tabs.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectCategory::DataScience => "Data Science & ML",
            ProjectCategory::WebDevelopment => "Développement Web",
            ProjectCategory::MobileDevelopment => "Développement Mobile",
            ProjectCategory::DevOps => "DevOps & Infrastructure",
            ProjectCategory::LowLevel => "Programmation Bas Niveau",
            ProjectCategory::Other => "Autres Projets",
        }
    }

    /// Keywords matched exactly against topics and lower-cased languages.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ProjectCategory::DataScience => &[
                "machine-learning",
                "deep-learning",
                "data-science",
                "data-analysis",
                "neural-networks",
                "tensorflow",
                "pytorch",
                "scikit-learn",
                "pandas",
                "numpy",
                "computer-vision",
                "nlp",
            ],
            ProjectCategory::WebDevelopment => &[
                "web",
                "react",
                "javascript",
                "typescript",
                "node",
                "express",
                "next",
                "vue",
                "angular",
                "css",
                "html",
                "frontend",
                "backend",
                "fullstack",
            ],
            ProjectCategory::MobileDevelopment => &[
                "mobile",
                "android",
                "ios",
                "react-native",
                "flutter",
                "swift",
                "kotlin",
            ],
            ProjectCategory::DevOps => &[
                "devops",
                "docker",
                "kubernetes",
                "aws",
                "azure",
                "gcp",
                "cicd",
                "ci-cd",
                "infrastructure",
            ],
            ProjectCategory::LowLevel => &[
                "c",
                "cpp",
                "c++",
                "assembly",
                "cobol",
                "low-level",
                "embedded",
                "system",
            ],
            ProjectCategory::Other => &[],
        }
    }
}
