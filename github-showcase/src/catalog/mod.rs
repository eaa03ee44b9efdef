//! Project categorization for the gallery view.
//!
//! Assigns every project to exactly one category of a fixed taxonomy,
//! deterministically and without state. Matching is deliberately exact:
//! a false positive here misplaces an entire project card. The skills view
//! uses a looser substring matcher (see [`crate::skills`]); the two must
//! stay distinct or tab contents change.

mod taxonomy;

pub use taxonomy::ProjectCategory;

use crate::projects::Project;
use serde::Serialize;
use tracing::debug;

/// Projects grouped by category, plus the unfiltered `all` bucket.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGrouping {
    /// Every project, in fetch order.
    pub all: Vec<Project>,

    /// One bucket per category, in taxonomy order. Every project in `all`
    /// appears in exactly one bucket.
    pub buckets: Vec<CategoryBucket>,
}

/// The projects assigned to one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBucket {
    pub category: ProjectCategory,
    pub projects: Vec<Project>,
}

impl CategoryGrouping {
    /// Returns the projects assigned to a category.
    pub fn bucket(&self, category: ProjectCategory) -> &[Project] {
        self.buckets
            .iter()
            .find(|bucket| bucket.category == category)
            .map(|bucket| bucket.projects.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates the buckets that received at least one project.
    pub fn non_empty(&self) -> impl Iterator<Item = &CategoryBucket> {
        self.buckets
            .iter()
            .filter(|bucket| !bucket.projects.is_empty())
    }
}

/// Assigns a project to exactly one category. First match wins.
///
/// Topic labels are the strongest signal and are checked across every
/// category before any language rule: a topic match in a later category
/// outranks a language match in an earlier one.
pub fn classify_project(project: &Project) -> ProjectCategory {
    for category in ProjectCategory::ALL {
        if project
            .topics
            .iter()
            .any(|topic| category.keywords().contains(&topic.as_str()))
        {
            return category;
        }
    }

    if let Some(language) = &project.language {
        let lowered = language.to_lowercase();
        for category in ProjectCategory::ALL {
            if category.keywords().contains(&lowered.as_str()) {
                return category;
            }
        }

        // Language-family fallback for languages absent from every table.
        match language.as_str() {
            "Python" | "Jupyter Notebook" => return ProjectCategory::DataScience,
            "JavaScript" | "TypeScript" | "HTML" | "CSS" => {
                return ProjectCategory::WebDevelopment
            }
            _ => {}
        }
    }

    ProjectCategory::Other
}

/// Groups projects by category, preserving fetch order inside each bucket.
pub fn group_by_category(projects: Vec<Project>) -> CategoryGrouping {
    let assigned: Vec<ProjectCategory> = projects.iter().map(classify_project).collect();

    for (project, category) in projects.iter().zip(&assigned) {
        debug!(project = %project.name, category = category.key(), "Classified project");
    }

    let buckets = ProjectCategory::ALL
        .iter()
        .map(|&category| CategoryBucket {
            category,
            projects: projects
                .iter()
                .zip(&assigned)
                .filter(|(_, &assigned)| assigned == category)
                .map(|(project, _)| project.clone())
                .collect(),
        })
        .collect();

    CategoryGrouping {
        all: projects,
        buckets,
    }
}
