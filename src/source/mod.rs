//! Release-source abstraction.
//!
//! This module provides a unified interface for listing published releases
//! from code-hosting platforms (GitHub today; others could slot in behind
//! the same trait).

mod github;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use github::{GITHUB_API_VERSION, GitHubSource};

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(RepoId {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// One page-item from the release listing.
///
/// Only the fields the pipeline needs are modeled; everything else the API
/// returns is carried untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawRelease {
    /// Unique, stable release id
    pub id: u64,
    /// Release title as published (often "name@version")
    pub name: Option<String>,
    /// Git tag the release points at
    pub tag_name: String,
    /// Link to the release page
    pub html_url: String,
    /// Page the release arrived on (1-based), recorded by the fetcher
    #[serde(skip)]
    pub page: u32,
    /// Pass-through for fields this tool does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Trait for release-listing sources (GitHub, etc.).
///
/// One call fetches one page; pagination policy lives in the pipeline, not
/// in the source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the API base URL.
    fn api_url(&self) -> &str;

    /// Fetch one page of releases for a repository.
    async fn list_releases(
        &self,
        repo: &RepoId,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawRelease>>;
}
