#![warn(clippy::unwrap_in_result)]
#![warn(clippy::unwrap_used)]

pub mod error;
pub mod gcs;

pub use error::{BucketError, Result};
pub use gcs::{GcsConfig, GcsStorage, REPORTS_PREFIX};
