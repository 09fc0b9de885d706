//! Progressive streaming command.

use anyhow::Result;
use log::debug;

use crate::pipeline::{FetchPlan, SnapshotStream};
use crate::source::{ReleaseSource, RepoId};

use super::print_groups;

/// Fetch page by page, reprinting the grouped releases after every page.
///
/// Each printed snapshot supersedes the previous one; the last is marked
/// complete. A failed page ends the stream with that error, leaving the
/// already-printed snapshots in place.
#[tracing::instrument(skip(source, plan))]
pub async fn stream(source: &dyn ReleaseSource, repo: &RepoId, plan: FetchPlan) -> Result<()> {
    debug!("Streaming releases for {}", repo);

    let mut snapshots = SnapshotStream::new(source, repo, plan);

    while let Some(result) = snapshots.next().await {
        let snapshot = result?;

        if snapshot.terminal {
            println!("=== {} (complete after {} page(s)) ===", repo, snapshot.page);
        } else {
            println!("=== {} (through page {}) ===", repo, snapshot.page);
        }
        print_groups(&snapshot.groups);
    }

    Ok(())
}
