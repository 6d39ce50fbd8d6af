use kernel::{ReportRow, SizeResolver};

use crate::error::{Error, Result};

/// Resolves occupied size of `id` inside `container` and builds report row.
///
/// Shared tail of both correlators.
pub async fn assemble_row<R: SizeResolver + ?Sized>(
    resolver: &R,
    container: &str,
    name: &str,
    id: &str,
    server: Option<&str>,
) -> Result<ReportRow> {
    let size = resolver
        .resolve_size(container, id)
        .await
        .map_err(|e| {
            tracing::error!("size of {container}/{id}: {e}");
            Error::SizeResolution {
                container: container.to_string(),
                object_id: id.to_string(),
                reason: e.to_string(),
            }
        })?;

    Ok(ReportRow {
        name: name.to_string(),
        id: id.to_string(),
        size,
        server: server.map(str::to_string),
        bucket: container.to_string(),
    })
}
