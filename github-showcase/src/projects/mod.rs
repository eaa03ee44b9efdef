//! Fetching and normalizing the account's public repositories.
//!
//! One unauthenticated GET against the repository-listing endpoint, then a
//! pure filter/normalize pass over the response. The upstream ordering
//! (most recently updated first) is preserved, never re-sorted.

mod detail;
mod error;
mod model;

pub use detail::{fetch_project_detail, ProjectDetail};
pub use error::FetchError;
pub use model::{thumbnail_url, Project, RawRepository, NO_DESCRIPTION};

use crate::config::AccountConfig;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

/// Results per page when listing repositories. The API caps listings at 100
/// and no further pagination is performed.
const PAGE_SIZE: u8 = 100;

/// Fetches the account's public repositories, filtered and normalized.
///
/// Filtering happens before the `limit` cap, in this order: forks, archived
/// repositories, then the names excluded by `config` (the account's
/// profile-readme and root-site repositories, plus any configured extras).
///
/// # Errors
///
/// Returns [`FetchError`] on any transport failure or non-success status.
/// Callers that feed a UI should contain the error there rather than let it
/// propagate further (see [`crate::runner::Runner`]).
pub async fn fetch_projects(
    octocrab: &Octocrab,
    config: &AccountConfig,
    limit: usize,
) -> Result<Vec<Project>, FetchError> {
    let span = info_span!("fetch_projects", account = %config.account(), limit);

    async {
        info!("Listing repositories");

        let route = format!(
            "/users/{}/repos?sort=updated&per_page={}",
            config.account(),
            PAGE_SIZE
        );
        let raw: Vec<RawRepository> = octocrab.get(route, None::<&()>).await?;
        debug!(count = raw.len(), "Received repository entries");

        let projects = normalize_repositories(raw, config, limit);
        info!(count = projects.len(), "Normalized repositories");
        Ok(projects)
    }
    .instrument(span)
    .await
}

/// Filters raw entries and normalizes the survivors, capping at `limit`.
///
/// Split from [`fetch_projects`] so the filtering policy is testable without
/// a live endpoint.
pub fn normalize_repositories(
    raw: Vec<RawRepository>,
    config: &AccountConfig,
    limit: usize,
) -> Vec<Project> {
    raw.into_iter()
        .filter(|repo| !repo.fork && !repo.archived && !config.is_excluded(&repo.name))
        .take(limit)
        .map(|repo| Project::from_raw(repo, config.account()))
        .collect()
}
