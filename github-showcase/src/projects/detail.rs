//! Single-repository detail fetch.
//!
//! Full metadata plus the decoded readme and a per-language byte-count
//! breakdown. Unused by the two live portfolio views; kept for the project
//! detail page.

use super::error::FetchError;
use super::model::{Project, RawRepository};
use crate::config::AccountConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, info_span, warn, Instrument};

/// Full metadata for one repository.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    /// The normalized entry, same shape as in the listing.
    pub project: Project,

    /// Decoded readme contents, if the repository has one.
    pub readme: Option<String>,

    /// Bytes of code per language. Empty when the breakdown is unavailable.
    pub languages: BTreeMap<String, u64>,
}

/// Readme payload as returned by the contents endpoint.
#[derive(Debug, Deserialize)]
struct RawReadme {
    /// Base64-encoded file contents, wrapped across lines by the API.
    #[serde(default)]
    content: String,
}

/// Fetches one repository's full metadata, readme and language breakdown.
///
/// A missing readme is not an error; the detail is returned with
/// `readme: None`. A failed language breakdown degrades to an empty map.
///
/// # Errors
///
/// Returns [`FetchError`] if the repository itself can't be fetched or the
/// readme payload is malformed.
pub async fn fetch_project_detail(
    octocrab: &Octocrab,
    config: &AccountConfig,
    repo: &str,
) -> Result<ProjectDetail, FetchError> {
    let span = info_span!("fetch_detail", account = %config.account(), repo);

    async {
        info!("Fetching repository detail");

        let route = format!("/repos/{}/{}", config.account(), repo);
        let raw: RawRepository = octocrab.get(route, None::<&()>).await?;
        let project = Project::from_raw(raw, config.account());

        let readme = fetch_readme(octocrab, config.account(), repo).await?;
        let languages = fetch_languages(octocrab, config.account(), repo).await;

        Ok(ProjectDetail {
            project,
            readme,
            languages,
        })
    }
    .instrument(span)
    .await
}

/// Fetches and decodes the repository readme. HTTP 404 means "no readme".
async fn fetch_readme(
    octocrab: &Octocrab,
    account: &str,
    repo: &str,
) -> Result<Option<String>, FetchError> {
    let route = format!("/repos/{account}/{repo}/readme");
    let raw: RawReadme = match octocrab.get(route, None::<&()>).await {
        Ok(raw) => raw,
        Err(error) if is_not_found(&error) => {
            debug!("Repository has no readme");
            return Ok(None);
        }
        Err(error) => return Err(error.into()),
    };

    // The API inserts newlines into the base64 payload every 60 characters.
    let packed: String = raw.content.split_whitespace().collect();
    let bytes = STANDARD
        .decode(packed.as_bytes())
        .map_err(|source| FetchError::ReadmeDecode {
            repo: repo.to_string(),
            source,
        })?;
    let text = String::from_utf8(bytes).map_err(|source| FetchError::ReadmeEncoding {
        repo: repo.to_string(),
        source,
    })?;

    Ok(Some(text))
}

/// Fetches the per-language byte counts, degrading to empty on failure.
async fn fetch_languages(octocrab: &Octocrab, account: &str, repo: &str) -> BTreeMap<String, u64> {
    let route = format!("/repos/{account}/{repo}/languages");
    match octocrab.get(route, None::<&()>).await {
        Ok(languages) => languages,
        Err(error) => {
            warn!(error = %error, "Failed to fetch language breakdown");
            BTreeMap::new()
        }
    }
}

fn is_not_found(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404
    )
}
