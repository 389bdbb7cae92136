// ==========================================
// Divider Calculatie - domain type definitions
// ==========================================
// Shape categories and rejection reasons
// Display strings are the external (Dutch) vocabulary of the
// input/output tables
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Shape category
// ==========================================
// Derived from free text, never stored independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeCategory {
    Plaat,
    StripPlat,
    Vierkant,
    Zeskant,
    Koker,
    Buis,
    Rond,
    Onbekend,
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeCategory::Plaat => write!(f, "Plaat"),
            ShapeCategory::StripPlat => write!(f, "Strip/Plat"),
            ShapeCategory::Vierkant => write!(f, "Vierkant"),
            ShapeCategory::Zeskant => write!(f, "Zeskant"),
            ShapeCategory::Koker => write!(f, "Koker"),
            ShapeCategory::Buis => write!(f, "Buis"),
            ShapeCategory::Rond => write!(f, "Rond"),
            ShapeCategory::Onbekend => write!(f, "Onbekend"),
        }
    }
}

// ==========================================
// Rejection reason
// ==========================================
// Only produced when the 52mm selection found no divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Footprint exceeds every divider in the catalog
    TeGroot,
    /// Height above the 95mm ceiling
    TeHoog,
    /// Within all maxima but no single divider accepts it
    PastNiet,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TeGroot => write!(f, "te groot"),
            RejectReason::TeHoog => write!(f, "te hoog"),
            RejectReason::PastNiet => write!(f, "past niet"),
        }
    }
}
