//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error (transport failure or non-success status).
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// Readme payload could not be base64-decoded.
    #[error("Failed to decode readme for '{repo}': {source}")]
    ReadmeDecode {
        repo: String,
        #[source]
        source: base64::DecodeError,
    },

    /// Decoded readme is not valid UTF-8.
    #[error("Readme for '{repo}' is not valid UTF-8: {source}")]
    ReadmeEncoding {
        repo: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
