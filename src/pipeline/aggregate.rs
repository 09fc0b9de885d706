//! Batch and streaming aggregation of release pages.

use anyhow::Result;
use log::debug;

use crate::release::{ParsedRelease, ReleaseGroup, compare_versions, group_releases};
use crate::source::{RawRelease, ReleaseSource, RepoId};

use super::fetch::{FetchPlan, fetch_all_pages};

/// Run the pipeline in batch mode: fetch every configured page, parse each
/// titled release, and group with the repository name as fallback.
///
/// Groups come back in first-seen order with members in arrival order;
/// apply [`sort_groups`] for display. Batch pages complete in any order,
/// so first-seen group order is not deterministic across runs.
pub async fn run_batch(
    source: &dyn ReleaseSource,
    repo: &RepoId,
    plan: &FetchPlan,
) -> Result<Vec<ReleaseGroup>> {
    let releases = fetch_all_pages(source, repo, plan).await?;
    Ok(build_groups(releases, &repo.repo))
}

/// Parse and group an accumulated release list.
fn build_groups(releases: Vec<RawRelease>, fallback: &str) -> Vec<ReleaseGroup> {
    let parsed = releases.into_iter().map(ParsedRelease::from_raw).collect();
    group_releases(parsed, fallback)
}

/// Sort each group's members newest-first. Unparsable versions are
/// not-comparable and keep their position (the sort is stable).
pub fn sort_groups(groups: &mut [ReleaseGroup]) {
    for group in groups.iter_mut() {
        group
            .members
            .sort_by(|a, b| compare_versions(a.parsed_version.as_deref(), b.parsed_version.as_deref()));
    }
}

/// One grouped-and-sorted rendering of the releases fetched so far.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Page this snapshot incorporates up to (1-based)
    pub page: u32,
    pub groups: Vec<ReleaseGroup>,
    /// True on the last snapshot of the sequence
    pub terminal: bool,
}

/// Progressive aggregation: one page per step, a fresh snapshot after each.
///
/// Pages are fetched strictly sequentially; the snapshot for page N is
/// produced before page N+1 is requested, and each snapshot supersedes the
/// previous one. The sequence is finite and cannot be restarted. It ends
/// with a terminal snapshot after the configured page range (or an empty
/// page), or with an error after which `next` returns `None`; snapshots
/// already yielded stay valid.
pub struct SnapshotStream<'a> {
    source: &'a dyn ReleaseSource,
    repo: &'a RepoId,
    plan: FetchPlan,
    accumulated: Vec<RawRelease>,
    next_page: u32,
    done: bool,
}

impl<'a> SnapshotStream<'a> {
    pub fn new(source: &'a dyn ReleaseSource, repo: &'a RepoId, plan: FetchPlan) -> Self {
        Self {
            source,
            repo,
            plan,
            accumulated: Vec::new(),
            next_page: 1,
            done: false,
        }
    }

    /// Fetch the next page and yield the snapshot covering everything
    /// accumulated so far.
    pub async fn next(&mut self) -> Option<Result<Snapshot>> {
        if self.done || self.next_page > self.plan.max_pages {
            return None;
        }

        let page = self.next_page;
        debug!("Fetching page {} of {}...", page, self.plan.max_pages);

        match self
            .source
            .list_releases(self.repo, page, self.plan.page_size)
            .await
        {
            Ok(items) => {
                let exhausted = items.is_empty();
                self.accumulated.extend(items);
                self.next_page += 1;

                let terminal = exhausted || page >= self.plan.max_pages;
                self.done = terminal;

                let mut groups = build_groups(self.accumulated.clone(), &self.repo.repo);
                sort_groups(&mut groups);

                Some(Ok(Snapshot {
                    page,
                    groups,
                    terminal,
                }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
