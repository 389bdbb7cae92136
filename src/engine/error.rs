// ==========================================
// Divider Calculatie - engine error types
// ==========================================
// thiserror derive macros
// ==========================================

use thiserror::Error;

/// Errors raised while normalizing the divider catalog.
///
/// Catalog rows are operator-edited and small; a malformed value aborts the
/// whole run rather than risking a silent misclassification.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("divider row {row} (\"{name}\"): field {field} is not a number: \"{value}\"")]
    InvalidNumber {
        row: usize,
        name: String,
        field: &'static str,
        value: String,
    },
}
