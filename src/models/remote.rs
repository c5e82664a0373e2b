//! Remote repository models
//!
//! The owner segment of a GitHub remote URL doubles as the identity key
//! for proxy-side authorization lookups, so parsing here must be exact
//! for both URL shapes git produces.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{FlotoolError, Result};

/// A GitHub repository identified from a remote URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRemote {
    /// Owner or organization segment; used as the authorization identity
    pub owner: String,
    /// Repository name with any trailing `.git` stripped
    pub repo: String,
}

impl GitHubRemote {
    /// Parse a remote URL in either shape:
    /// `git@github.com:owner/repo(.git)?` or
    /// `http(s)://github.com/owner/repo(.git)?`
    pub fn from_remote_url(remote_url: &str) -> Result<Self> {
        parse_remote_url(remote_url)
            .ok_or_else(|| FlotoolError::IdentityNotDerivable(remote_url.to_string()))
    }

    /// The identity-provider username the proxy keys authorization on
    pub fn identity(&self) -> &str {
        &self.owner
    }

    /// `owner/repo` identifier the proxy scopes credentials to
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Strip a single trailing `.git`, leaving inner occurrences intact
fn strip_git_suffix(path: &str) -> &str {
    path.strip_suffix(".git").unwrap_or(path)
}

fn parse_remote_url(url: &str) -> Option<GitHubRemote> {
    // SSH short form: git@github.com:owner/repo.git
    if let Some(path) = url.strip_prefix("git@github.com:") {
        let path = strip_git_suffix(path.trim_end_matches('/'));
        let mut parts = path.splitn(2, '/');
        let owner = parts.next().filter(|s| !s.is_empty())?;
        let repo = parts.next().filter(|s| !s.is_empty())?;
        return Some(GitHubRemote {
            owner: owner.to_string(),
            repo: repo.to_string(),
        });
    }

    // Scheme form: https://github.com/owner/repo.git
    let parsed = Url::parse(url).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    if parsed.host_str() != Some("github.com") {
        return None;
    }
    let path = strip_git_suffix(parsed.path().trim_matches('/'));
    let mut parts = path.split('/');
    let owner = parts.next().filter(|s| !s.is_empty())?;
    let repo = parts.next().filter(|s| !s.is_empty())?;
    Some(GitHubRemote {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}
