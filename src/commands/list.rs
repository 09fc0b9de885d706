//! Batch listing command.

use anyhow::Result;
use log::debug;

use crate::pipeline::{FetchPlan, run_batch, sort_groups};
use crate::source::{ReleaseSource, RepoId};

use super::print_groups;

/// Fetch all configured pages at once and print the grouped releases,
/// newest version first within each group.
#[tracing::instrument(skip(source, plan))]
pub async fn list(source: &dyn ReleaseSource, repo: &RepoId, plan: &FetchPlan) -> Result<()> {
    debug!("Listing releases for {}", repo);

    let mut groups = run_batch(source, repo, plan).await?;
    if groups.is_empty() {
        println!("No releases found for {}.", repo);
        return Ok(());
    }

    sort_groups(&mut groups);
    print_groups(&groups);

    Ok(())
}
