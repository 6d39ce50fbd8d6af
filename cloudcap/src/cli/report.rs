use std::path::Path;
use std::str::FromStr;

use bucket::{GcsConfig, GcsStorage};
use chrono::Local;
use client::{Credential, OntapClient};
use kernel::Mode;

use crate::cli::error::CliError;
use crate::cli::export::create_csv;
use crate::cli::output::print_table;
use crate::cli::progress::Progress;

pub const EXPORT_VALUES: [&str; 3] = ["none", "local", "cloud"];

/// Where the report goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Export {
    /// Console table
    None,
    /// CSV file in the working directory
    Local,
    /// CSV file uploaded into the run's container
    Cloud,
}

impl FromStr for Export {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Export::None),
            "local" => Ok(Export::Local),
            "cloud" => Ok(Export::Cloud),
            _ => Err(format!("unknown export '{s}'")),
        }
    }
}

pub struct ReportParams {
    pub cluster: String,
    pub user: String,
    pub password: String,
    pub mode: Mode,
    pub export: Export,
}

pub async fn run(params: ReportParams) -> Result<(), CliError> {
    let credential = Credential::basic(&params.user, &params.password);
    let client = OntapClient::new(&params.cluster, credential)?;
    let storage = GcsStorage::connect(GcsConfig::from_env()).await?;
    tracing::debug!("building {} report for {}", params.mode, params.cluster);

    let progress = (params.export == Export::None).then(|| Progress::start(params.mode));
    let result = client::build_report(params.mode, &client, &storage).await;
    if let Some(p) = progress {
        p.stop().await;
    }
    let report = result?;

    match params.export {
        Export::None => print_table(params.mode, &report.rows),
        Export::Local => {
            let path = create_csv(
                Path::new("."),
                params.mode,
                &report.rows,
                Local::now().naive_local(),
            )?;
            println!("report written to {}", path.display());
        }
        Export::Cloud => {
            if report.container.is_empty() {
                return Err(CliError::NoContainer(params.mode));
            }
            let path = create_csv(
                Path::new("."),
                params.mode,
                &report.rows,
                Local::now().naive_local(),
            )?;
            let name = storage.upload(&path, &report.container).await?;
            println!("report uploaded to {}/{name}", report.container);
        }
    }
    Ok(())
}
