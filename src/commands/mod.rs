//! CLI command implementations.

mod list;
mod services;
mod stream;

pub use list::list;
pub use services::{build_http_client, build_source};
pub use stream::stream;

use crate::release::ReleaseGroup;

/// Print grouped releases: one heading per group, one version row per
/// release with its link.
fn print_groups(groups: &[ReleaseGroup]) {
    for group in groups {
        println!("{}", group.name);
        for member in &group.members {
            println!("  {}  {}", member.display_version(), member.raw.html_url);
        }
    }
}
