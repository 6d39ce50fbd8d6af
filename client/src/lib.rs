#![warn(clippy::unwrap_in_result)]
#![warn(clippy::unwrap_used)]

//! Capacity reports for cloud backed volumes of a storage cluster.
//!
//! Queries the array management API, correlates replication relationships
//! or tiering targets with volumes and object store mappings, and resolves
//! the cloud footprint of every volume found.

pub mod backup;
pub mod error;
pub mod fetcher;
pub mod report;
pub mod resource;
pub mod tiering;

pub use backup::backup_report;
pub use error::{Error, Result};
pub use fetcher::{Credential, OntapClient};
pub use tiering::tiering_report;

use kernel::{Mode, Report, SizeResolver};

/// Runs correlation selected by the mode.
pub async fn build_report<R: SizeResolver + ?Sized>(
    mode: Mode,
    client: &OntapClient,
    resolver: &R,
) -> Result<Report> {
    match mode {
        Mode::Backup => backup_report(client, resolver).await,
        Mode::Tiering => tiering_report(client, resolver).await,
    }
}
