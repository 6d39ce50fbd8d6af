use kernel::Mode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] client::Error),

    #[error(transparent)]
    Bucket(#[from] bucket::BucketError),

    #[error("cannot write report: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("no {0} container found, nothing to upload the report to")]
    NoContainer(Mode),
}
