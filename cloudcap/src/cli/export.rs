//! CSV export of reports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use kernel::{Mode, ReportRow};

use crate::cli::error::CliError;

pub const LOCATION_SCHEME: &str = "gs";
const TIMESTAMP_FORMAT: &str = "%m-%d-%Y-%H%M%S";
const HEADER: [&str; 4] = ["Server", "Volume Name", "Size", "Location"];

#[must_use]
pub fn timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `<mode>-<timestamp>.csv`
#[must_use]
pub fn file_name(mode: Mode, timestamp: &str) -> String {
    format!("{mode}-{timestamp}.csv")
}

/// Writes header, one line per row and the generation trailer.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow], timestamp: &str) -> Result<W, CliError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(HEADER)?;
    for r in rows {
        let location = r.location(LOCATION_SCHEME);
        csv.write_record([
            r.server.as_deref().unwrap_or_default(),
            r.name.as_str(),
            r.size.as_str(),
            location.as_str(),
        ])?;
    }

    let mut writer = csv.into_inner().map_err(|e| e.into_error())?;
    write!(writer, "\nFile generated on {timestamp}")?;
    Ok(writer)
}

/// Creates report file in `dir` and returns its path.
pub fn create_csv(
    dir: &Path,
    mode: Mode,
    rows: &[ReportRow],
    at: NaiveDateTime,
) -> Result<PathBuf, CliError> {
    let timestamp = timestamp(at);
    let path = dir.join(file_name(mode, &timestamp));
    let file = File::create(&path)?;
    let mut writer = write_report(BufWriter::new(file), rows, &timestamp)?;
    writer.flush()?;
    tracing::info!("report written to {}", path.display());
    Ok(path)
}
