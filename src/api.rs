// ==========================================
// Divider Calculatie - pipeline API
// ==========================================
// Responsibility: one call wiring importer -> engine -> report
// Used by the CLI binary; keeps file paths out of the engine layer
// ==========================================

use crate::domain::{default_divider_definitions, NO_MATCH};
use crate::engine::classify_batch;
use crate::engine::CatalogError;
use crate::importer::{load_divider_definitions, load_part_records, ImportError};
use crate::report::{write_report, ReportError, ReportFormat};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// One full classification run, file to file.
#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    /// Part table (CSV) to classify
    pub input: PathBuf,
    /// Divider table (CSV); None uses the factory defaults
    pub dividers: Option<PathBuf>,
    /// Override height for the 95mm regime; None keeps raw heights
    pub override_height_95: Option<f64>,
    /// Result table destination
    pub output: PathBuf,
    /// Result table format
    pub format: ReportFormat,
}

/// Counters reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_in: usize,
    pub matched_52: usize,
    pub unmatched_52: usize,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input table: {0}")]
    Import(#[from] ImportError),

    #[error("divider catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("result table: {0}")]
    Report(#[from] ReportError),
}

/// Run the classification pipeline for one request.
///
/// # Flow
/// 1. Load and validate the part table
/// 2. Load the divider table (or take the factory defaults)
/// 3. Classify under both height regimes
/// 4. Write the result table
pub fn run_classification(request: &ClassificationRequest) -> Result<RunSummary, PipelineError> {
    let records = load_part_records(&request.input)?;

    let definitions = match &request.dividers {
        Some(path) => load_divider_definitions(path)?,
        None => default_divider_definitions(),
    };

    let rows = classify_batch(&records, &definitions, request.override_height_95)?;

    write_report(&request.output, &rows, request.format)?;

    let matched_52 = rows.iter().filter(|r| r.beste_indeling_52 != NO_MATCH).count();
    let summary = RunSummary {
        rows_in: rows.len(),
        matched_52,
        unmatched_52: rows.len() - matched_52,
    };

    info!(
        rows_in = summary.rows_in,
        matched_52 = summary.matched_52,
        unmatched_52 = summary.unmatched_52,
        "classification run complete"
    );

    Ok(summary)
}
