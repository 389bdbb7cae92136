// ==========================================
// Divider Calculatie - classification result row
// ==========================================
// Output contract of the batch classifier
// Serde renames carry the exact (Dutch) output table headers
// ==========================================

use serde::{Deserialize, Serialize};

/// Sentinel written when no divider matched.
pub const NO_MATCH: &str = "GEEN";

/// One output row, in input order, one per input part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRow {
    #[serde(rename = "Stuklijst_id")]
    pub stuklijst_id: String,

    /// Rounded "L×B×H" label
    #[serde(rename = "afmetingen (lxbxh) in mm")]
    pub afmetingen: String,

    /// Best divider under the 52mm regime, or "GEEN"
    #[serde(rename = "beste indeling (52mm)")]
    pub beste_indeling_52: String,

    /// Best divider under the 95mm regime, or "GEEN"
    #[serde(rename = "hoogtecheck 95mm")]
    pub hoogtecheck_95: String,

    /// Rejection reason, empty when the 52mm selection matched
    #[serde(rename = "reden")]
    pub reden: String,
}
