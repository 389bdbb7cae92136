// ==========================================
// Divider Calculatie - numeric field parsing
// ==========================================
// Responsibility: string -> number conversion for spreadsheet cells
// Two regimes: lenient (part fields, bad input -> 0.0) and
// strict (catalog fields, bad input -> error)
// ==========================================

use regex::Regex;
use std::num::ParseFloatError;
use std::sync::OnceLock;

/// Lenient numeric parse for part fields.
///
/// Spreadsheet exports use a comma as decimal separator, so the comma is
/// rewritten to a dot before parsing. Anything that still does not parse,
/// or parses to a non-finite value, becomes 0.0 — a bad cell must never
/// abort a batch.
pub fn lenient_number(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Strict numeric parse for divider-catalog fields.
///
/// Catalog rows are operator-edited and expected well-formed; a value that
/// does not parse is a hard error for the caller to report.
pub fn strict_number(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().parse::<f64>()
}

fn grid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+)\s*[×xX]\s*(\d+)").expect("grid pattern is valid")
    })
}

/// Number of grid cells encoded in a divider name.
///
/// A name like "2×4" (or ascii "2x4" / "2X4") counts 8 cells. Names without
/// a recognisable RxC pair count as a single cell.
pub fn grid_cell_count(name: &str) -> u32 {
    let Some(caps) = grid_pattern().captures(name) else {
        return 1;
    };
    let rows = caps[1].parse::<u32>().ok();
    let cols = caps[2].parse::<u32>().ok();
    match (rows, cols) {
        (Some(r), Some(c)) => r.checked_mul(c).unwrap_or(1),
        _ => 1,
    }
}
