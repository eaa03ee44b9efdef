//! Orchestrates a full portfolio refresh.
//!
//! Mirrors the two independently mounted site views: the gallery and the
//! skills cloud each issue their own fetch with no shared cache, no in-flight
//! coalescing, no retry and no timeout beyond transport defaults. A failed
//! fetch never aborts the refresh; the affected view renders empty with an
//! error message on a side channel, and retry is the caller's move.

use crate::catalog::{group_by_category, CategoryGrouping};
use crate::config::AccountConfig;
use crate::projects::{fetch_project_detail, fetch_projects, FetchError, Project, ProjectDetail};
use crate::skills::{extract_technologies, SkillProfile};
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{error, info};

/// Configuration for a portfolio refresh.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Account to showcase.
    account: AccountConfig,
    /// Maximum projects in the gallery view.
    gallery_limit: usize,
    /// Maximum projects sampled for the skills view.
    skills_limit: usize,
}

impl RunnerConfig {
    /// Creates a configuration with the site's view limits.
    pub fn new(account: AccountConfig) -> Self {
        Self {
            account,
            gallery_limit: 30,
            skills_limit: 20,
        }
    }

    /// Sets the gallery view limit.
    #[must_use]
    pub fn with_gallery_limit(mut self, limit: usize) -> Self {
        self.gallery_limit = limit;
        self
    }

    /// Sets the skills sample limit.
    #[must_use]
    pub fn with_skills_limit(mut self, limit: usize) -> Self {
        self.skills_limit = limit;
        self
    }

    /// Returns the account configuration.
    pub fn account(&self) -> &AccountConfig {
        &self.account
    }

    /// Returns the gallery view limit.
    pub fn gallery_limit(&self) -> usize {
        self.gallery_limit
    }

    /// Returns the skills sample limit.
    pub fn skills_limit(&self) -> usize {
        self.skills_limit
    }
}

/// Errors that can occur while setting up a refresh.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Account configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}

/// Everything the two portfolio views render from one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    /// Projects grouped by category.
    pub gallery: CategoryGrouping,

    /// Recurring technologies grouped by family.
    pub skills: SkillProfile,

    /// Set when the gallery fetch failed; the gallery is then empty.
    pub gallery_error: Option<String>,

    /// Set when the skills fetch failed; the profile is then empty.
    pub skills_error: Option<String>,
}

impl PortfolioView {
    /// Returns true if either view's fetch failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.gallery_error.is_some() || self.skills_error.is_some()
    }
}

/// Fetches and classifies the account's repositories for both views.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner with an unauthenticated client. Only public read
    /// endpoints are used.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder().build()?;
        Ok(Self { config, octocrab })
    }

    /// Builds a runner around an existing client.
    pub fn with_client(config: RunnerConfig, octocrab: Octocrab) -> Self {
        Self { config, octocrab }
    }

    /// Performs a full refresh: one fetch per view, then classification.
    pub async fn run(&self) -> PortfolioView {
        info!(account = %self.config.account.account(), "Refreshing portfolio");

        let (projects, gallery_error) = self.fetch_view(self.config.gallery_limit).await;
        let gallery = group_by_category(projects);

        let (sample, skills_error) = self.fetch_view(self.config.skills_limit).await;
        let skills = extract_technologies(&sample);

        PortfolioView {
            gallery,
            skills,
            gallery_error,
            skills_error,
        }
    }

    /// Fetches one repository's full detail (readme, language breakdown).
    pub async fn detail(&self, repo: &str) -> Result<ProjectDetail, FetchError> {
        fetch_project_detail(&self.octocrab, &self.config.account, repo).await
    }

    /// One view's fetch. Failure is contained here: the view gets an empty
    /// list and the error message travels on the side channel.
    async fn fetch_view(&self, limit: usize) -> (Vec<Project>, Option<String>) {
        match fetch_projects(&self.octocrab, &self.config.account, limit).await {
            Ok(projects) => (projects, None),
            Err(e) => {
                error!(error = %e, "Failed to fetch repositories");
                (Vec::new(), Some(e.to_string()))
            }
        }
    }
}
