//! Errors that abort a report run.
//!
//! Mismatches found while correlating records are not errors: they simply
//! contribute nothing to the report.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid cluster address: {0}")]
    InvalidAddress(String),

    /// Connectivity, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non success status.
    #[error("{url}: {status}")]
    Status { url: String, status: String },

    #[error("cannot decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot resolve size of {container}/{object_id}: {reason}")]
    SizeResolution {
        container: String,
        object_id: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
