// ==========================================
// Divider Calculatie - dimension resolver
// ==========================================
// Responsibility: part record + shape category -> (L, B, H) in mm
// Invariant: total function, bad cells resolve to 0, never an error
// ==========================================

use crate::domain::{PartRecord, ShapeCategory};
use crate::engine::shape::detect_shape;
use crate::numeric::lenient_number;

/// Resolved part dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Length
    pub l: f64,
    /// Breadth
    pub b: f64,
    /// Height
    pub h: f64,
}

/// Resolve the effective (L, B, H) of a part record.
///
/// Which raw fields feed which axis depends on the detected shape:
///
/// | Shape      | L                | B            | H            |
/// |------------|------------------|--------------|--------------|
/// | Plaat      | P1               | P2           | P3           |
/// | Strip/Plat | netto lengte     | max(P1,P2)   | min(P1,P2)   |
/// | Vierkant   | netto lengte     | P1           | P1           |
/// | Zeskant    | netto lengte     | P1           | P1           |
/// | Koker      | netto lengte     | max(P1,P2)   | min(P1,P2)   |
/// | Buis       | netto lengte     | P1           | P1           |
/// | Rond       | netto lengte     | P1           | P1           |
/// | Onbekend   | lengte, else max(P1,P2) | P2, else P1 | P1    |
///
/// All source cells parse leniently (comma decimals, garbage -> 0), and the
/// result is clamped to finite non-negative values.
pub fn resolve_dimensions(record: &PartRecord) -> Dimensions {
    let shape = detect_shape(&record.soort, &record.omschrijving);

    let p: Vec<f64> = record.p.iter().map(|v| lenient_number(v)).collect();
    let (p1, p2, p3) = (p[0], p[1], p[2]);
    let length = lenient_number(&record.netto_lengte);

    let (l, b, h) = match shape {
        ShapeCategory::Plaat => (p1, p2, p3),
        ShapeCategory::StripPlat | ShapeCategory::Koker => {
            (length, p1.max(p2), p1.min(p2))
        }
        ShapeCategory::Vierkant
        | ShapeCategory::Zeskant
        | ShapeCategory::Buis
        | ShapeCategory::Rond => (length, p1, p1),
        ShapeCategory::Onbekend => {
            let l = if length != 0.0 { length } else { p1.max(p2) };
            let b = if p2 != 0.0 { p2 } else { p1 };
            (l, b, p1)
        }
    };

    Dimensions {
        l: sanitize(l),
        b: sanitize(b),
        h: sanitize(h),
    }
}

/// Clamp a resolved value to a finite, non-negative number.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
