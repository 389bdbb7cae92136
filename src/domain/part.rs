// ==========================================
// Divider Calculatie - part record
// ==========================================
// One bill-of-materials line as read from the input table
// Numeric-looking fields stay raw text: interpretation is the
// dimension resolver's job, not the importer's
// ==========================================

use serde::{Deserialize, Serialize};

/// Number of raw dimensional parameters per part (P1..P5).
pub const PARAM_COUNT: usize = 5;

/// A single input row.
///
/// Immutable once imported. `p` holds P1..P5 exactly as they appeared in
/// the sheet (locale-formatted, possibly blank); `netto_lengte` likewise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Stuklijst identifier, copied through to the output
    pub stuklijst_id: String,
    /// Category text (Soort)
    pub soort: String,
    /// Free-text description (Omschrijving)
    pub omschrijving: String,
    /// Raw P1..P5 parameter cells
    pub p: [String; PARAM_COUNT],
    /// Raw "Netto lengte PL" cell
    pub netto_lengte: String,
}
