//! Raw and normalized repository models.

use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder substituted when a repository carries no description.
pub const NO_DESCRIPTION: &str = "no description available";

/// A repository entry as returned by the listing endpoint.
///
/// Only the fields the portfolio consumes are deserialized; everything the
/// upstream API may omit defaults to a safe value.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: Url,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

/// A normalized repository entry.
///
/// Created fresh on every fetch and never mutated afterwards; re-fetching
/// replaces the whole collection.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Opaque, stable identifier from the upstream API.
    pub id: u64,

    /// Repository name.
    pub name: String,

    /// Free-text description. Never empty; falls back to [`NO_DESCRIPTION`].
    pub description: String,

    /// Canonical repository URL.
    pub url: Url,

    /// Homepage URL, if one is set and non-blank.
    pub homepage: Option<String>,

    /// Star count, passed through unmodified.
    pub stars: u32,

    /// Fork count, passed through unmodified.
    pub forks: u32,

    /// Primary language label, if the API reports one.
    pub language: Option<String>,

    /// Creation timestamp, passed through unmodified.
    pub created: Option<String>,

    /// Last-update timestamp, passed through unmodified.
    pub updated: Option<String>,

    /// Topic labels, possibly empty.
    pub topics: Vec<String>,

    /// Social-preview thumbnail URL. Synthesized, never checked to resolve;
    /// renderers must handle a broken image themselves.
    pub image: String,
}

impl Project {
    /// Normalizes a raw entry for the given account.
    pub(crate) fn from_raw(raw: RawRepository, account: &str) -> Self {
        let description = match raw.description {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_DESCRIPTION.to_string(),
        };
        // GitHub reports an unset homepage as "" rather than null.
        let homepage = raw.homepage.filter(|url| !url.trim().is_empty());
        let image = thumbnail_url(account, &raw.name);

        Self {
            id: raw.id,
            name: raw.name,
            description,
            url: raw.html_url,
            homepage,
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            language: raw.language,
            created: raw.created_at,
            updated: raw.updated_at,
            topics: raw.topics,
            image,
        }
    }
}

/// Builds the deterministic social-preview thumbnail URL for a repository.
pub fn thumbnail_url(account: &str, repo: &str) -> String {
    format!("https://opengraph.githubassets.com/1/{account}/{repo}")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A plain raw entry for tests: no description, no topics, not a fork.
    pub(crate) fn raw_repository(id: u64, name: &str) -> RawRepository {
        RawRepository {
            id,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/someone/{name}")
                .parse()
                .unwrap(),
            homepage: None,
            stargazers_count: 0,
            forks_count: 0,
            language: None,
            created_at: None,
            updated_at: None,
            topics: Vec::new(),
            fork: false,
            archived: false,
        }
    }

    #[test]
    fn missing_description_gets_placeholder() {
        let project = Project::from_raw(raw_repository(1, "tool"), "someone");
        assert_eq!(project.description, NO_DESCRIPTION);
    }

    #[test]
    fn blank_description_gets_placeholder() {
        let mut raw = raw_repository(1, "tool");
        raw.description = Some("   ".to_string());

        let project = Project::from_raw(raw, "someone");
        assert_eq!(project.description, NO_DESCRIPTION);
    }

    #[test]
    fn present_description_is_kept() {
        let mut raw = raw_repository(1, "tool");
        raw.description = Some("A small tool".to_string());

        let project = Project::from_raw(raw, "someone");
        assert_eq!(project.description, "A small tool");
    }

    #[test]
    fn blank_homepage_becomes_none() {
        let mut raw = raw_repository(1, "tool");
        raw.homepage = Some(String::new());

        let project = Project::from_raw(raw, "someone");
        assert_eq!(project.homepage, None);
    }

    #[test]
    fn counters_and_timestamps_pass_through() {
        let mut raw = raw_repository(1, "tool");
        raw.stargazers_count = 12;
        raw.forks_count = 3;
        raw.created_at = Some("2023-01-01T00:00:00Z".to_string());
        raw.updated_at = Some("2024-06-01T00:00:00Z".to_string());

        let project = Project::from_raw(raw, "someone");
        assert_eq!(project.stars, 12);
        assert_eq!(project.forks, 3);
        assert_eq!(project.created.as_deref(), Some("2023-01-01T00:00:00Z"));
        assert_eq!(project.updated.as_deref(), Some("2024-06-01T00:00:00Z"));
    }

    #[test]
    fn thumbnail_is_deterministic() {
        let project = Project::from_raw(raw_repository(1, "tool"), "someone");
        assert_eq!(
            project.image,
            "https://opengraph.githubassets.com/1/someone/tool"
        );
    }
}
