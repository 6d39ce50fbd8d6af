//! Google Cloud Storage backend.
//!
//! Size of a volume's cloud copy is the sum of sizes of all objects whose
//! name starts with the volume's identifier.

use std::env;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bytesize::ByteSize;
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::objects::list::ListObjectsRequest;
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use google_cloud_storage::http::Error as GcsError;
use kernel::SizeResolver;

use crate::error::{BucketError, Result};

pub const EMULATOR_HOST_VAR: &str = "STORAGE_EMULATOR_HOST";

/// Object name prefix uploaded reports are stored under.
pub const REPORTS_PREFIX: &str = "reports/";

const CSV_CONTENT_TYPE: &str = "text/csv";
const PRECONDITION_FAILED: u16 = 412;
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(50);

#[derive(Clone, Debug, Default)]
pub struct GcsConfig {
    /// Emulator address. Requests go unauthenticated when set.
    pub emulator: Option<String>,
}

impl GcsConfig {
    #[must_use]
    pub fn emulator(host: &str) -> Self {
        Self {
            emulator: Some(host.to_string()),
        }
    }

    /// Reads `STORAGE_EMULATOR_HOST`.
    #[must_use]
    pub fn from_env() -> Self {
        let emulator = env::var(EMULATOR_HOST_VAR).ok().filter(|h| !h.is_empty());
        Self { emulator }
    }
}

/// `localhost:4443` and `http://localhost:4443/` both become
/// `http://localhost:4443`.
fn emulator_endpoint(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}

#[derive(Clone)]
pub struct GcsStorage {
    client: Client,
}

impl GcsStorage {
    /// Connects with application default credentials, or anonymously to
    /// the emulator when one is configured.
    pub async fn connect(config: GcsConfig) -> Result<Self> {
        let client_config = match config.emulator {
            Some(host) => {
                let mut c = ClientConfig::default().anonymous();
                c.storage_endpoint = emulator_endpoint(&host);
                tracing::debug!("using storage emulator at {}", c.storage_endpoint);
                c
            }
            None => ClientConfig::default()
                .with_auth()
                .await
                .map_err(|e| BucketError::Credentials(e.to_string()))?,
        };
        Ok(Self {
            client: Client::new(client_config),
        })
    }

    /// Total size in bytes of objects in `bucket` whose names start with `prefix`.
    pub async fn occupied_bytes(&self, bucket: &str, prefix: &str) -> Result<u64> {
        let mut request = ListObjectsRequest {
            bucket: bucket.to_string(),
            prefix: Some(prefix.to_string()),
            ..Default::default()
        };
        let mut total = 0u64;

        loop {
            tracing::debug!("list {bucket}/{prefix}*");
            let page = self
                .client
                .list_objects(&request)
                .await
                .map_err(|e| storage_error(bucket, e))?;

            for object in page.items.unwrap_or_default() {
                let size = u64::try_from(object.size).map_err(|_| BucketError::InvalidSize {
                    bucket: bucket.to_string(),
                    name: object.name.clone(),
                    size: object.size,
                })?;
                total = total.saturating_add(size);
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => request.page_token = Some(token),
                _ => break,
            }
        }

        Ok(total)
    }

    /// Uploads local file into `bucket` under [`REPORTS_PREFIX`].
    ///
    /// Create only: fails with [`BucketError::AlreadyExists`] when an object
    /// with the same name is present. Returns the object name.
    pub async fn upload(&self, path: &Path, bucket: &str) -> Result<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("no file name in {}", path.display()),
                )
            })?;
        let name = format!("{REPORTS_PREFIX}{file_name}");
        let data = tokio::fs::read(path).await?;

        let request = UploadObjectRequest {
            bucket: bucket.to_string(),
            if_generation_match: Some(0),
            ..Default::default()
        };
        let mut media = Media::new(name.clone());
        media.content_type = CSV_CONTENT_TYPE.into();
        tracing::debug!("upload {bucket}/{name}");

        let upload_type = UploadType::Simple(media);
        let upload = self.client.upload_object(&request, data, &upload_type);
        let result = tokio::time::timeout(UPLOAD_TIMEOUT, upload)
            .await
            .map_err(|_| BucketError::Timeout {
                bucket: bucket.to_string(),
                name: name.clone(),
            })?;

        match result {
            Ok(_) => {
                tracing::info!("uploaded {bucket}/{name}");
                Ok(name)
            }
            Err(GcsError::Response(r)) if r.code == PRECONDITION_FAILED => {
                Err(BucketError::AlreadyExists {
                    bucket: bucket.to_string(),
                    name,
                })
            }
            Err(e) => Err(storage_error(bucket, e)),
        }
    }
}

fn storage_error(bucket: &str, e: GcsError) -> BucketError {
    match e {
        GcsError::Response(r) => BucketError::Status {
            bucket: bucket.to_string(),
            code: r.code,
            message: r.message,
        },
        other => BucketError::Storage(other),
    }
}

#[async_trait]
impl SizeResolver for GcsStorage {
    type Err = BucketError;

    async fn resolve_size(&self, container: &str, object_id: &str) -> Result<String> {
        let bytes = self.occupied_bytes(container, object_id).await?;
        Ok(human_size(bytes))
    }
}

/// Binary units, i.e. `1.5 KiB`.
#[must_use]
pub fn human_size(bytes: u64) -> String {
    ByteSize::b(bytes).to_string_as(true)
}
