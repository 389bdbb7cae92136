// ==========================================
// Divider Calculatie - core library
// ==========================================
// Batch classifier: bill-of-materials rows -> smallest fitting
// storage divider, under two compartment-height regimes
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and vocabularies
pub mod domain;

// Engine layer - classification rules
pub mod engine;

// Import layer - tabular input boundary
pub mod importer;

// Report layer - tabular output boundary
pub mod report;

// Pipeline API - file-to-file runs
pub mod api;

// Numeric/string cell parsing
pub mod numeric;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

pub use api::{run_classification, ClassificationRequest, PipelineError, RunSummary};
pub use domain::{
    default_divider_definitions, ClassificationRow, Divider, DividerDefinition, PartRecord,
    RejectReason, ShapeCategory, NO_MATCH,
};
pub use engine::{
    best_divider, build_catalog, classify_batch, detect_shape, resolve_dimensions, CatalogError,
    Dimensions, HEIGHT_CEILING_MM,
};
pub use importer::{load_divider_definitions, load_part_records, ImportError};
pub use report::{write_report, ReportFormat};

/// Crate version, surfaced by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
