#![warn(clippy::unwrap_in_result)]
#![warn(clippy::unwrap_used)]

use std::fmt::{self, Debug, Display};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const PATH_SEP: char = ':';

/// Envelope of every collection endpoint of the management API.
///
/// The API wraps collections into `{"records": [...]}`. Missing
/// `records` decodes into an empty collection.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Records<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

/// One side of a replication relationship.
///
/// The path has `<container>:<volume>` form, i.e. `netapp-backup-1:vol_a`
/// for a cloud destination or `aggr1:vol_a` for a source.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Endpoint {
    pub path: String,
    pub uuid: String,
}

impl Endpoint {
    /// Text before the first `:` of the path (the whole path when there is no `:`).
    #[must_use]
    pub fn container(&self) -> &str {
        self.path
            .split_once(PATH_SEP)
            .map_or(self.path.as_str(), |(container, _)| container)
    }

    /// Second `:` separated segment of the path.
    #[must_use]
    pub fn volume(&self) -> Option<&str> {
        self.path.split(PATH_SEP).nth(1)
    }
}

/// Summary form of a replication relationship as returned by the listing.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RelationshipSummary {
    pub uuid: String,
    pub destination: Endpoint,
}

/// Full relationship, fetched one by one by uuid.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RelationshipDetail {
    pub uuid: String,
    pub source: Endpoint,
    pub destination: Endpoint,
}

/// A configured cloud target (listing form).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CloudTarget {
    pub uuid: String,
    pub name: String,
}

/// Cluster a cloud target belongs to.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClusterRef {
    pub name: String,
}

/// Detail of a cloud target.
///
/// Container and cluster name drive every tiering lookup that follows.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CloudTargetDetail {
    pub uuid: String,
    pub name: String,
    pub container: String,
    pub cluster: ClusterRef,
}

/// A cluster volume as reported by the private CLI passthrough.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct VolumeRecord {
    /// Volume name
    #[serde(rename = "volume")]
    pub name: String,
    /// Volume uuid, the join key against [`BuftreeMapping::vol_uuid`]
    pub uuid: String,
    /// Name of the owning storage virtual machine
    #[serde(rename = "vserver")]
    pub server: String,
}

/// Association between a volume and its cold tier block tree.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BuftreeMapping {
    pub object_store_name: String,
    pub buftree_uuid: String,
    pub vol_uuid: String,
}

/// One line of a capacity report.
///
/// The id is always the cloud side identifier: the relationship
/// destination uuid for backups, the buftree uuid for tiering.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Volume name
    pub name: String,
    /// Cloud side identifier of the volume data
    pub id: String,
    /// Human readable occupied size
    pub size: String,
    /// Owning server, only known for tiering
    pub server: Option<String>,
    /// Bucket (container) holding the data
    pub bucket: String,
}

impl ReportRow {
    /// Renders `<scheme>://<bucket>/<id>`.
    #[must_use]
    pub fn location(&self, scheme: &str) -> String {
        format!("{scheme}://{}/{}", self.bucket, self.id)
    }
}

/// Result of one correlation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Container inferred for the run, empty when none was found
    pub container: String,
    pub rows: Vec<ReportRow>,
}

impl Report {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Which cloud service a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Backup,
    Tiering,
}

impl Mode {
    /// Capitalized form used in console headings.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Backup => "Backup",
            Mode::Tiering => "Tiering",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Backup => write!(f, "backup"),
            Mode::Tiering => write!(f, "tiering"),
        }
    }
}

/// Resolves how much cloud storage an object occupies.
///
/// The container is the bucket holding the data and the object id the
/// volume or buftree identifier inside it.
#[async_trait]
pub trait SizeResolver: Send + Sync {
    type Err: Debug + Display;

    async fn resolve_size(&self, container: &str, object_id: &str) -> Result<String, Self::Err>;
}
