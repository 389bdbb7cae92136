// ==========================================
// Divider Calculatie - import error types
// ==========================================
// thiserror derive macros
// ==========================================

use thiserror::Error;

pub type ImportResult<T> = Result<T, ImportError>;

/// Errors raised at the tabular input boundary, before the core runs.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse failure: {0}")]
    Csv(#[from] csv::Error),

    // ===== table validation errors =====
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("input table has no header row")]
    EmptyTable,
}
