//! Cloud tiering correlation.
//!
//! The `StorageAccount` cloud target names the bucket, the cluster and the
//! object store. Volumes of the cluster's data server are then joined with
//! the object store's buftree mappings on volume uuid.

use kernel::{BuftreeMapping, CloudTarget, Report, SizeResolver, VolumeRecord};

use crate::error::Result;
use crate::fetcher::OntapClient;
use crate::report::assemble_row;

/// Name of the cloud target used for tiering.
pub const TARGET_NAME: &str = "StorageAccount";

/// Prefix of data server names as well as of internal volume names.
pub const SERVER_PREFIX: &str = "svm_";

/// What the tiering target tells about the run.
///
/// All fields are empty when the cluster has no tiering target.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TieringTarget {
    /// Target name, also the object store name
    pub name: String,
    /// Bucket the cold blocks are tiered to
    pub container: String,
    pub cluster_name: String,
}

/// First target named [`TARGET_NAME`]. Other targets with the same name
/// are ignored.
#[must_use]
pub fn find_target(targets: &[CloudTarget]) -> Option<&CloudTarget> {
    targets.iter().find(|t| t.name == TARGET_NAME)
}

/// Volumes owned by `svm_<cluster_name>` except internal `svm_*` ones.
#[must_use]
pub fn select_volumes(records: Vec<VolumeRecord>, cluster_name: &str) -> Vec<VolumeRecord> {
    if cluster_name.is_empty() {
        return Vec::new();
    }
    let server = format!("{SERVER_PREFIX}{cluster_name}");
    records
        .into_iter()
        .filter(|v| v.server == server && !v.name.starts_with(SERVER_PREFIX))
        .collect()
}

/// Mappings that belong to the object store.
#[must_use]
pub fn select_mappings(records: Vec<BuftreeMapping>, object_store_name: &str) -> Vec<BuftreeMapping> {
    if object_store_name.is_empty() {
        return Vec::new();
    }
    records
        .into_iter()
        .filter(|m| m.object_store_name == object_store_name)
        .collect()
}

/// Inner join on volume uuid. Pairs come in volume order, then mapping
/// order; a volume with several mappings yields several pairs.
#[must_use]
pub fn join<'a>(
    volumes: &'a [VolumeRecord],
    mappings: &'a [BuftreeMapping],
) -> Vec<(&'a VolumeRecord, &'a BuftreeMapping)> {
    volumes
        .iter()
        .flat_map(|v| {
            mappings
                .iter()
                .filter(move |m| m.vol_uuid == v.uuid)
                .map(move |m| (v, m))
        })
        .collect()
}

/// Looks up the tiering target and its detail.
pub async fn tiering_target(client: &OntapClient) -> Result<TieringTarget> {
    let targets = client.cloud_targets().await?;
    let Some(target) = find_target(&targets) else {
        tracing::info!("no cloud target named {TARGET_NAME}");
        return Ok(TieringTarget::default());
    };

    let detail = client.cloud_target(&target.uuid).await?;
    Ok(TieringTarget {
        name: target.name.clone(),
        container: detail.container,
        cluster_name: detail.cluster.name,
    })
}

/// Builds cloud tiering report.
pub async fn tiering_report<R: SizeResolver + ?Sized>(
    client: &OntapClient,
    resolver: &R,
) -> Result<Report> {
    let target = tiering_target(client).await?;
    tracing::info!(
        "tiering container: '{}', cluster: '{}'",
        target.container,
        target.cluster_name
    );

    let volumes = select_volumes(client.volumes().await?, &target.cluster_name);
    let mappings = select_mappings(client.buftree_mappings().await?, &target.name);
    tracing::debug!(
        "{} volumes, {} buftree mappings selected",
        volumes.len(),
        mappings.len()
    );

    let mut rows = Vec::new();
    for (volume, mapping) in join(&volumes, &mappings) {
        let row = assemble_row(
            resolver,
            &target.container,
            &volume.name,
            &mapping.buftree_uuid,
            Some(volume.server.as_str()),
        )
        .await?;
        rows.push(row);
    }

    Ok(Report {
        container: target.container,
        rows,
    })
}
