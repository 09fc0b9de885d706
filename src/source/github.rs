//! GitHub release-source implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::http::HttpClient;

use super::{RawRelease, ReleaseSource, RepoId};

/// GitHub REST API version sent with every request.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub id: u64,
        pub name: Option<String>,
        pub tag_name: String,
        pub html_url: String,
        #[serde(flatten)]
        pub extra: serde_json::Map<String, serde_json::Value>,
    }
}

/// GitHub release-source implementation.
pub struct GitHubSource {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubSource {
    /// Create a new GitHub source with default API URL.
    pub fn new(client: Client) -> Self {
        Self::with_api_url(client, "https://api.github.com")
    }

    /// Create a new GitHub source with custom API URL.
    pub fn with_api_url(client: Client, api_url: &str) -> Self {
        Self {
            http_client: HttpClient::new(client),
            api_url: api_url.to_string(),
        }
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.to_string(),
        }
    }
}

#[async_trait]
impl ReleaseSource for GitHubSource {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn list_releases(
        &self,
        repo: &RepoId,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawRelease>> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);
        debug!("Fetching releases page {} from {}...", page, url);

        let parsed: Vec<api::Release> = self
            .http_client
            .get_json_with_query(
                &url,
                &[
                    ("per_page", &per_page.to_string()),
                    ("page", &page.to_string()),
                ],
                &[
                    ("Accept", "application/vnd.github+json"),
                    ("X-GitHub-Api-Version", GITHUB_API_VERSION),
                ],
            )
            .await?;

        Ok(parsed.into_iter().map(|r| r.into_raw(page)).collect())
    }
}

impl api::Release {
    fn into_raw(self, page: u32) -> RawRelease {
        RawRelease {
            id: self.id,
            name: self.name,
            tag_name: self.tag_name,
            html_url: self.html_url,
            page,
            extra: self.extra,
        }
    }
}
