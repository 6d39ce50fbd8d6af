use thiserror::Error;

#[derive(Error, Debug)]
pub enum BucketError {
    #[error("cannot obtain storage credentials: {0}")]
    Credentials(String),

    #[error("storage error: {0}")]
    Storage(#[from] google_cloud_storage::http::Error),

    #[error("bucket {bucket}: {code} {message}")]
    Status {
        bucket: String,
        code: u16,
        message: String,
    },

    #[error("object {bucket}/{name} reports invalid size {size}")]
    InvalidSize {
        bucket: String,
        name: String,
        size: i64,
    },

    /// Uploads never overwrite.
    #[error("object {bucket}/{name} already exists")]
    AlreadyExists { bucket: String, name: String },

    #[error("upload of {bucket}/{name} timed out")]
    Timeout { bucket: String, name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BucketError>;
