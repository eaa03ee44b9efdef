//! Account configuration.
//!
//! The showcased account is an explicit value handed to the fetcher at
//! construction time, optionally loaded from a small TOML file.

mod account;
mod error;

pub use account::{AccountConfig, DEFAULT_ACCOUNT};
pub use error::ConfigError;

use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Parsed contents of an account configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct AccountFile {
    /// GitHub account whose repositories feed the portfolio.
    account: String,

    /// Repository names to exclude on top of the reserved ones.
    #[serde(default)]
    excluded_repos: Vec<String>,
}

/// Loads an [`AccountConfig`] from a TOML file.
///
/// The file carries the account name and, optionally, extra repository
/// exclusions:
///
/// ```toml
/// account = "amdjadouxx"
/// excluded-repos = ["sandbox"]
/// ```
///
/// # Errors
///
/// Returns [`ConfigError`] if the file can't be read, isn't valid TOML, or
/// names an empty account.
pub fn load_account(path: &Path) -> Result<AccountConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: AccountFile = toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })?;

    if file.account.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: "account must not be empty".to_string(),
        });
    }

    let mut config = AccountConfig::new(file.account);
    for repo in file.excluded_repos {
        config = config.with_excluded_repo(repo);
    }

    info!(account = config.account(), "Loaded account configuration");
    Ok(config)
}
