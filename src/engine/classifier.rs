// ==========================================
// Divider Calculatie - row classifier / batch orchestrator
// ==========================================
// Responsibility: per-row dimension resolution + dual-regime selection
// Invariant: one output row per input row, input order preserved
// Invariant: a catalog error aborts before any row is processed
// ==========================================

use crate::domain::{ClassificationRow, DividerDefinition, PartRecord, RejectReason, NO_MATCH};
use crate::engine::catalog::build_catalog;
use crate::engine::dimensions::{resolve_dimensions, Dimensions};
use crate::engine::error::CatalogError;
use crate::engine::fit::best_divider;
use tracing::{debug, info};

/// Fixed height ceiling for the "te hoog" rejection reason, in mm.
pub const HEIGHT_CEILING_MM: f64 = 95.0;

/// Classify a batch of part records against both height regimes.
///
/// The two catalogs are built up front from the same operator rows: one
/// with raw heights (52mm regime) and one with the optional override
/// substituted (95mm regime). Both selections run for every row — the
/// height-check column is reported regardless of the 52mm outcome.
///
/// # Parameters
/// - records: input rows, classified independently
/// - definitions: operator divider rows
/// - override_height_95: effective height for the 95mm regime, or None to
///   reuse the raw heights
///
/// # Errors
/// A malformed catalog number fails the whole batch before the first row.
pub fn classify_batch(
    records: &[PartRecord],
    definitions: &[DividerDefinition],
    override_height_95: Option<f64>,
) -> Result<Vec<ClassificationRow>, CatalogError> {
    let catalog_52 = build_catalog(definitions, None)?;
    let catalog_95 = build_catalog(definitions, override_height_95)?;

    // Footprint maxima of the 52mm catalog, for the "te groot" reason
    let max_l_52 = catalog_52.iter().map(|d| d.l).fold(0.0, f64::max);
    let max_b_52 = catalog_52.iter().map(|d| d.b).fold(0.0, f64::max);

    info!(
        rows = records.len(),
        dividers = catalog_52.len(),
        override_95 = ?override_height_95,
        "classifying batch"
    );

    let mut results = Vec::with_capacity(records.len());

    for record in records {
        let dims = resolve_dimensions(record);

        let best_52 = best_divider(&dims, &catalog_52).map(|d| d.name.clone());
        let best_95 = best_divider(&dims, &catalog_95).map(|d| d.name.clone());

        let reason = match best_52 {
            Some(_) => None,
            None => Some(reject_reason(&dims, max_l_52, max_b_52)),
        };

        debug!(
            stuklijst = %record.stuklijst_id,
            l = dims.l,
            b = dims.b,
            h = dims.h,
            best_52 = best_52.as_deref().unwrap_or(NO_MATCH),
            best_95 = best_95.as_deref().unwrap_or(NO_MATCH),
            "row classified"
        );

        results.push(ClassificationRow {
            stuklijst_id: record.stuklijst_id.clone(),
            afmetingen: dimensions_label(&dims),
            beste_indeling_52: best_52.unwrap_or_else(|| NO_MATCH.to_string()),
            hoogtecheck_95: best_95.unwrap_or_else(|| NO_MATCH.to_string()),
            reden: reason.map(|r| r.to_string()).unwrap_or_default(),
        });
    }

    info!(
        matched_52 = results.iter().filter(|r| r.beste_indeling_52 != NO_MATCH).count(),
        unmatched_52 = results.iter().filter(|r| r.beste_indeling_52 == NO_MATCH).count(),
        "batch done"
    );

    Ok(results)
}

/// Why the 52mm selection came up empty.
fn reject_reason(dims: &Dimensions, max_l: f64, max_b: f64) -> RejectReason {
    if dims.l > max_l || dims.b > max_b {
        RejectReason::TeGroot
    } else if dims.h > HEIGHT_CEILING_MM {
        RejectReason::TeHoog
    } else {
        RejectReason::PastNiet
    }
}

/// Rounded "L×B×H" label for the output table.
fn dimensions_label(dims: &Dimensions) -> String {
    format!(
        "{}×{}×{}",
        dims.l.round() as i64,
        dims.b.round() as i64,
        dims.h.round() as i64
    )
}
