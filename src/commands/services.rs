//! Service construction for command execution.
//!
//! Builds the HTTP client and release source from configuration values;
//! the services themselves are not part of the configuration.

use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::http::HttpClient;
use crate::source::GitHubSource;

/// Per-request timeout for release-source calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent("ghrb-cli")
        .default_headers(headers)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub release source from configuration
pub fn build_source(api_url: &str, token: Option<&str>) -> Result<GitHubSource> {
    let http_client = build_http_client(token)?;
    Ok(GitHubSource::from_http_client(http_client, api_url))
}
