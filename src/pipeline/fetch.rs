//! Paginated release fetching.

use anyhow::Result;
use futures_util::{StreamExt, stream};
use log::debug;

use crate::source::{RawRelease, ReleaseSource, RepoId};

/// Pagination and concurrency settings for one aggregation run.
///
/// Defaults: 5 pages of 100 releases, 5 requests in flight. 100 is the
/// GitHub API's per_page ceiling.
#[derive(Debug, Clone)]
pub struct FetchPlan {
    /// Highest page number to request (pages are numbered from 1)
    pub max_pages: u32,
    /// Releases per page, an upper bound per request
    pub page_size: u32,
    /// Cap on simultaneous in-flight page requests in batch mode
    pub concurrency: usize,
}

impl Default for FetchPlan {
    fn default() -> Self {
        Self {
            max_pages: 5,
            page_size: 100,
            concurrency: 5,
        }
    }
}

/// Fetch pages 1..=max_pages concurrently, capped at `concurrency` in flight.
///
/// Fails fast: the first page error aborts the whole batch and drops the
/// remaining in-flight requests, returning no partial result. Items are
/// accumulated in page-completion order, so the returned buffer carries no
/// inter-page ordering guarantee.
#[tracing::instrument(skip(source, plan))]
pub async fn fetch_all_pages(
    source: &dyn ReleaseSource,
    repo: &RepoId,
    plan: &FetchPlan,
) -> Result<Vec<RawRelease>> {
    let mut pages = stream::iter(1..=plan.max_pages)
        .map(|page| async move {
            debug!("Fetching page {} of {}...", page, plan.max_pages);
            source.list_releases(repo, page, plan.page_size).await
        })
        .buffer_unordered(plan.concurrency);

    let mut releases = Vec::new();
    while let Some(result) = pages.next().await {
        releases.extend(result?);
    }

    debug!("Fetched {} release(s) for {}", releases.len(), repo);

    Ok(releases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FetchError;
    use crate::source::MockReleaseSource;

    fn raw(id: u64, name: &str, page: u32) -> RawRelease {
        RawRelease {
            id,
            name: Some(name.to_string()),
            tag_name: name.to_string(),
            html_url: format!("https://example.com/r/{}", id),
            page,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_merges_every_page() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .returning(|_, page, per_page| {
                assert_eq!(per_page, 100);
                Ok(match page {
                    1 => vec![raw(1, "pkg@1.0.0", 1), raw(2, "pkg@2.0.0", 1)],
                    2 => vec![raw(3, "pkg@3.0.0", 2)],
                    _ => vec![],
                })
            });

        let repo: RepoId = "owner/repo".parse().unwrap();
        let plan = FetchPlan {
            max_pages: 3,
            ..Default::default()
        };

        let releases = fetch_all_pages(&source, &repo, &plan).await.unwrap();

        let mut ids: Vec<u64> = releases.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_requests_exactly_max_pages() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .times(5)
            .returning(|_, _, _| Ok(vec![]));

        let repo: RepoId = "owner/repo".parse().unwrap();

        let releases = fetch_all_pages(&source, &repo, &FetchPlan::default())
            .await
            .unwrap();
        assert!(releases.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_pages_fails_fast_on_page_error() {
        let mut source = MockReleaseSource::new();
        source.expect_list_releases().returning(|_, page, _| {
            if page == 2 {
                Err(anyhow::Error::from(FetchError::NotFound(
                    "page 2".to_string(),
                )))
            } else {
                Ok(vec![raw(page as u64, "pkg@1.0.0", page)])
            }
        });

        let repo: RepoId = "owner/repo".parse().unwrap();
        let result = fetch_all_pages(&source, &repo, &FetchPlan::default()).await;

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<FetchError>().is_some());
    }
}
