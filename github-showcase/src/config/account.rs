//! Showcased account and its exclusion list.

/// Account showcased when no other configuration is provided.
pub const DEFAULT_ACCOUNT: &str = "amdjadouxx";

/// The GitHub account whose repositories feed the portfolio, plus the
/// repository names excluded from every listing.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    account: String,
    excluded_repos: Vec<String>,
}

impl AccountConfig {
    /// Creates a configuration for the given account.
    ///
    /// Two reserved names are always excluded: the profile-readme repository
    /// (named exactly like the account) and the personal root site
    /// (`{account}.github.io`).
    pub fn new(account: impl Into<String>) -> Self {
        let account = account.into();
        let excluded_repos = vec![account.clone(), format!("{account}.github.io")];
        Self {
            account,
            excluded_repos,
        }
    }

    /// Adds a repository name to the exclusion list.
    #[must_use]
    pub fn with_excluded_repo(mut self, name: impl Into<String>) -> Self {
        self.excluded_repos.push(name.into());
        self
    }

    /// Returns the account name.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns true if the repository name is excluded from listings.
    pub fn is_excluded(&self, repo_name: &str) -> bool {
        self.excluded_repos.iter().any(|name| name == repo_name)
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT)
    }
}
