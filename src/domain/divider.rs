// ==========================================
// Divider Calculatie - divider definitions and catalog entries
// ==========================================
// DividerDefinition: one operator-edited catalog row, raw text
// Divider: normalized catalog entry with derived cells/area/effective H
// ==========================================

use serde::{Deserialize, Serialize};

/// One operator-edited divider row.
///
/// Dimensions stay raw text here; the catalog builder parses them strictly
/// and rejects the whole batch on a malformed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerDefinition {
    /// Divider name, conventionally "RxC" grid notation (e.g. "2×4")
    pub name: String,
    /// Inner length in mm, raw text
    #[serde(rename = "L")]
    pub l: String,
    /// Inner breadth in mm, raw text
    #[serde(rename = "B")]
    pub b: String,
    /// Inner height in mm, raw text
    #[serde(rename = "H")]
    pub h: String,
}

impl DividerDefinition {
    pub fn new(name: &str, l: &str, b: &str, h: &str) -> Self {
        Self {
            name: name.to_string(),
            l: l.to_string(),
            b: b.to_string(),
            h: h.to_string(),
        }
    }
}

/// Normalized catalog entry, derived from a [`DividerDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    pub name: String,
    /// Inner length in mm
    pub l: f64,
    /// Inner breadth in mm
    pub b: f64,
    /// Effective height in mm (raw H, or the regime override)
    pub h: f64,
    /// Grid cell count parsed from the name (1 when unparsable)
    pub cells: u32,
    /// Footprint area L×B in mm²
    pub area: f64,
}

/// Factory-default divider catalog.
///
/// The operator can replace these with an edited table; the values below
/// are the shipped 52mm crate inserts.
pub fn default_divider_definitions() -> Vec<DividerDefinition> {
    const DEFAULTS: [(&str, &str, &str, &str); 8] = [
        ("2×2", "166", "117", "52"),
        ("2×4", "166", "57", "52"),
        ("3×2", "111", "113", "52"),
        ("3×4", "111", "57", "52"),
        ("4×2", "82", "115", "52"),
        ("4×4", "82", "57", "52"),
        ("4×8", "82", "28", "52"),
        ("6×4", "52", "56", "30"),
    ];

    DEFAULTS
        .iter()
        .map(|(name, l, b, h)| DividerDefinition::new(name, l, b, h))
        .collect()
}
