// ==========================================
// Divider Calculatie - divider catalog builder
// ==========================================
// Responsibility: operator rows -> sorted, annotated catalog
// Invariant: strict parsing, first malformed value aborts the build
// Invariant: sort order is (cells desc, area asc, name asc)
// ==========================================

use crate::domain::{Divider, DividerDefinition};
use crate::engine::error::CatalogError;
use crate::numeric::{grid_cell_count, strict_number};

/// The one divider whose own height survives a regime override.
///
/// The "6×4" insert is a physically different tray; its height is fixed
/// no matter which height regime is being checked. Exact name match,
/// unicode glyph included.
const OVERRIDE_EXEMPT_NAME: &str = "6×4";

/// Build a normalized, sorted catalog from operator divider rows.
///
/// With `override_height` set, every entry's effective height becomes the
/// override — except the [`OVERRIDE_EXEMPT_NAME`] entry, which keeps its
/// own. Without it, raw heights pass through.
///
/// Entries are sorted finest-first: more grid cells first, then smaller
/// footprint area, then name as a deterministic tie-break.
pub fn build_catalog(
    definitions: &[DividerDefinition],
    override_height: Option<f64>,
) -> Result<Vec<Divider>, CatalogError> {
    let mut catalog = Vec::with_capacity(definitions.len());

    for (row, def) in definitions.iter().enumerate() {
        let l = parse_field(row, def, "L", &def.l)?;
        let b = parse_field(row, def, "B", &def.b)?;
        let h_raw = parse_field(row, def, "H", &def.h)?;

        let h = match override_height {
            None => h_raw,
            Some(_) if def.name == OVERRIDE_EXEMPT_NAME => h_raw,
            Some(value) => value,
        };

        catalog.push(Divider {
            name: def.name.clone(),
            l,
            b,
            h,
            cells: grid_cell_count(&def.name),
            area: l * b,
        });
    }

    catalog.sort_by(|a, b| {
        b.cells
            .cmp(&a.cells)
            .then(a.area.total_cmp(&b.area))
            .then(a.name.cmp(&b.name))
    });

    Ok(catalog)
}

fn parse_field(
    row: usize,
    def: &DividerDefinition,
    field: &'static str,
    value: &str,
) -> Result<f64, CatalogError> {
    strict_number(value).map_err(|_| CatalogError::InvalidNumber {
        row,
        name: def.name.clone(),
        field,
        value: value.to_string(),
    })
}
