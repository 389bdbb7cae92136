// ==========================================
// Divider Calculatie - result table writer
// ==========================================
// Responsibility: classification rows -> CSV or JSON output file
// Column names come from the serde renames on ClassificationRow
// ==========================================

use crate::domain::ClassificationRow;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Output file format for the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failure: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write failure: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the result table in the requested format.
pub fn write_report(
    path: &Path,
    rows: &[ClassificationRow],
    format: ReportFormat,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Csv => write_csv(path, rows),
        ReportFormat::Json => write_json(path, rows),
    }?;
    info!(path = %path.display(), rows = rows.len(), ?format, "report written");
    Ok(())
}

fn write_csv(path: &Path, rows: &[ClassificationRow]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &Path, rows: &[ClassificationRow]) -> Result<(), ReportError> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, rows)?;
    Ok(())
}
