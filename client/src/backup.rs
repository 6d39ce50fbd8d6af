//! Cloud backup correlation.
//!
//! Two passes over the relationship listing: the first finds the backup
//! container, the second fetches details of every relationship that
//! replicates into it.

use kernel::{RelationshipSummary, Report, ReportRow, SizeResolver};

use crate::error::Result;
use crate::fetcher::OntapClient;
use crate::report::assemble_row;

/// Destination path prefix that marks a cloud backup container.
pub const BACKUP_PREFIX: &str = "netapp-backup";

/// Container of the first relationship whose destination path starts
/// with [`BACKUP_PREFIX`].
#[must_use]
pub fn infer_container(summaries: &[RelationshipSummary]) -> Option<&str> {
    summaries
        .iter()
        .find(|s| s.destination.path.starts_with(BACKUP_PREFIX))
        .map(|s| s.destination.container())
}

/// Relationships replicating into the container.
pub fn candidates<'a>(
    summaries: &'a [RelationshipSummary],
    container: &'a str,
) -> impl Iterator<Item = &'a RelationshipSummary> + 'a {
    summaries
        .iter()
        .filter(move |s| s.destination.path.starts_with(container))
}

/// Fetches detail of a single relationship and turns it into report row.
///
/// `Ok(None)` means the relationship contributes nothing: the detail
/// carries another uuid than the summary or its source path has no
/// volume part.
pub async fn resolve_relationship<R: SizeResolver + ?Sized>(
    client: &OntapClient,
    resolver: &R,
    container: &str,
    summary: &RelationshipSummary,
) -> Result<Option<ReportRow>> {
    let detail = client.relationship(&summary.uuid).await?;
    if detail.uuid != summary.uuid {
        tracing::debug!(
            "relationship {} answered with uuid {}, skipped",
            summary.uuid,
            detail.uuid
        );
        return Ok(None);
    }

    let Some(volume) = detail.source.volume() else {
        tracing::debug!(
            "relationship {} has no volume in source path '{}', skipped",
            summary.uuid,
            detail.source.path
        );
        return Ok(None);
    };

    let row = assemble_row(resolver, container, volume, &detail.destination.uuid, None).await?;
    Ok(Some(row))
}

/// Builds cloud backup report.
pub async fn backup_report<R: SizeResolver + ?Sized>(
    client: &OntapClient,
    resolver: &R,
) -> Result<Report> {
    let summaries = client.relationships().await?;

    let Some(container) = infer_container(&summaries) else {
        tracing::info!("no relationship replicates into a {BACKUP_PREFIX} container");
        return Ok(Report::empty());
    };
    tracing::info!("backup container: {container}");

    let mut rows = Vec::new();
    for summary in candidates(&summaries, container) {
        if let Some(row) = resolve_relationship(client, resolver, container, summary).await? {
            rows.push(row);
        }
    }

    Ok(Report {
        container: container.to_string(),
        rows,
    })
}
