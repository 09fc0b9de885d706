//! Release aggregation pipeline: fetch, parse, group, sort.
//!
//! Two delivery modes over the same building blocks: [`run_batch`] fans out
//! all pages under a concurrency cap and returns the grouped result at
//! once; [`SnapshotStream`] walks pages one at a time and yields a fresh
//! grouped-and-sorted snapshot after every page.

mod aggregate;
mod fetch;

pub use aggregate::{Snapshot, SnapshotStream, run_batch, sort_groups};
pub use fetch::{FetchPlan, fetch_all_pages};
