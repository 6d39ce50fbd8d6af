use std::fmt;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use kernel::{
    BuftreeMapping, CloudTarget, CloudTargetDetail, Records, RelationshipDetail,
    RelationshipSummary, VolumeRecord,
};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::resource::Resource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const RELATIONSHIPS_PATH: &str = "api/snapmirror/relationships/";
const TARGETS_PATH: &str = "api/cloud/targets/";
const VOLUMES_PATH: &str = "api/private/cli/volume/";
const BUFTREES_PATH: &str = "api/private/cli/storage/aggregate/object-store/vol-btuuids";

const VOLUME_FIELDS: &str = "uuid,volume";
const BUFTREE_FIELDS: &str = "buftree_uuid,vol_uuid";

/// Basic authentication credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    header: String,
}

impl Credential {
    #[must_use]
    pub fn basic(user: &str, password: &str) -> Self {
        let encoded = BASE64.encode(format!("{user}:{password}"));
        Self {
            header: format!("Basic {encoded}"),
        }
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.header
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Credential(***)")
    }
}

/// Storage array management API client.
///
/// Every call is a single authenticated GET whose JSON body is decoded
/// into the record shape asked for. Nothing is retried.
#[derive(Clone, Debug)]
pub struct OntapClient {
    http: Client,
    base: Resource,
    credential: Credential,
}

impl OntapClient {
    /// Creates client for the cluster given by host name, ip or full URI.
    ///
    /// Certificate validation is disabled because arrays usually serve
    /// self signed certificates.
    pub fn new(cluster: &str, credential: Credential) -> Result<Self> {
        let base =
            Resource::cluster(cluster).ok_or_else(|| Error::InvalidAddress(cluster.to_string()))?;
        let http = Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base,
            credential,
        })
    }

    fn resource(&self, path: &str) -> Resource {
        let mut r = self.base.clone();
        r.append_path(path);
        r
    }

    /// Performs GET against the resource and decodes the body as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, resource: &Resource) -> Result<T> {
        let url = resource.to_string();
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.credential.header_value())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("GET {url}: {e}");
                Error::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("GET {url}: {status}");
            return Err(Error::Status {
                url,
                status: status.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| {
            tracing::error!("GET {url}: {source}");
            Error::Decode { url, source }
        })
    }

    pub async fn relationships(&self) -> Result<Vec<RelationshipSummary>> {
        let r: Records<RelationshipSummary> =
            self.fetch(&self.resource(RELATIONSHIPS_PATH)).await?;
        Ok(r.records)
    }

    pub async fn relationship(&self, uuid: &str) -> Result<RelationshipDetail> {
        let mut resource = self.resource(RELATIONSHIPS_PATH);
        resource.append_path(uuid);
        self.fetch(&resource).await
    }

    pub async fn cloud_targets(&self) -> Result<Vec<CloudTarget>> {
        let r: Records<CloudTarget> = self.fetch(&self.resource(TARGETS_PATH)).await?;
        Ok(r.records)
    }

    pub async fn cloud_target(&self, uuid: &str) -> Result<CloudTargetDetail> {
        let mut resource = self.resource(TARGETS_PATH);
        resource.append_path(uuid);
        self.fetch(&resource).await
    }

    pub async fn volumes(&self) -> Result<Vec<VolumeRecord>> {
        let mut resource = self.resource(VOLUMES_PATH);
        resource.set_query(&[("fields", VOLUME_FIELDS)]);
        let r: Records<VolumeRecord> = self.fetch(&resource).await?;
        Ok(r.records)
    }

    pub async fn buftree_mappings(&self) -> Result<Vec<BuftreeMapping>> {
        let mut resource = self.resource(BUFTREES_PATH);
        resource.set_query(&[("fields", BUFTREE_FIELDS)]);
        let r: Records<BuftreeMapping> = self.fetch(&resource).await?;
        Ok(r.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_credential_header() {
        // Arrange

        // Act
        let c = Credential::basic("admin", "secret");

        // Assert
        assert_eq!(c.header_value(), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn credential_debug_hides_secret() {
        // Arrange
        let c = Credential::basic("admin", "secret");

        // Act
        let s = format!("{c:?}");

        // Assert
        assert!(!s.contains("YWRtaW46c2VjcmV0"));
    }

    #[test]
    fn invalid_cluster_address() {
        // Arrange

        // Act
        let r = OntapClient::new("", Credential::basic("a", "b"));

        // Assert
        assert!(matches!(r, Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn endpoint_urls() {
        // Arrange
        let c = OntapClient::new("cluster1", Credential::basic("a", "b")).unwrap();

        // Act
        let mut volumes = c.resource(VOLUMES_PATH);
        volumes.set_query(&[("fields", VOLUME_FIELDS)]);
        let mut buftrees = c.resource(BUFTREES_PATH);
        buftrees.set_query(&[("fields", BUFTREE_FIELDS)]);

        // Assert
        assert_eq!(
            volumes.to_string(),
            "https://cluster1/api/private/cli/volume/?fields=uuid,volume"
        );
        assert_eq!(
            buftrees.to_string(),
            "https://cluster1/api/private/cli/storage/aggregate/object-store/vol-btuuids?fields=buftree_uuid,vol_uuid"
        );
    }
}
