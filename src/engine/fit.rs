// ==========================================
// Divider Calculatie - fit matcher and divider selector
// ==========================================
// Responsibility: pure fit predicate + first-fit walk over the catalog
// Invariant: footprint check is orientation-flexible (L/B may swap)
// ==========================================

use crate::domain::Divider;
use crate::engine::dimensions::Dimensions;

/// Does a part with these dimensions fit inside the divider?
///
/// Height is checked first: a part strictly taller than the effective
/// height never fits (equal height does). The footprint then has to fit in
/// either orientation, so the part may be rotated a quarter turn.
pub fn fits(dims: &Dimensions, divider: &Divider) -> bool {
    if dims.h > divider.h {
        return false;
    }
    (dims.l <= divider.l && dims.b <= divider.b)
        || (dims.b <= divider.l && dims.l <= divider.b)
}

/// First divider in catalog order accepting the dimensions.
///
/// The catalog is sorted finest/smallest-first, so the first hit is also
/// the most specific compartment. `None` when nothing accepts.
pub fn best_divider<'a>(dims: &Dimensions, catalog: &'a [Divider]) -> Option<&'a Divider> {
    catalog.iter().find(|divider| fits(dims, divider))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider(name: &str, l: f64, b: f64, h: f64) -> Divider {
        Divider {
            name: name.to_string(),
            l,
            b,
            h,
            cells: 1,
            area: l * b,
        }
    }

    fn dims(l: f64, b: f64, h: f64) -> Dimensions {
        Dimensions { l, b, h }
    }

    #[test]
    fn test_fits_height_is_strict_reject() {
        let d = divider("4×4", 82.0, 57.0, 52.0);
        assert!(fits(&dims(50.0, 40.0, 52.0), &d)); // equal height fits
        assert!(!fits(&dims(50.0, 40.0, 52.1), &d));
    }

    #[test]
    fn test_fits_is_orientation_symmetric() {
        let d = divider("3×4", 111.0, 57.0, 52.0);
        assert!(fits(&dims(100.0, 40.0, 40.0), &d));
        assert!(fits(&dims(40.0, 100.0, 40.0), &d)); // swapped footprint
    }

    #[test]
    fn test_fits_footprint_boundaries() {
        let d = divider("4×8", 82.0, 28.0, 52.0);
        assert!(fits(&dims(82.0, 28.0, 52.0), &d)); // exact fit
        assert!(!fits(&dims(83.0, 28.0, 52.0), &d));
        assert!(!fits(&dims(82.0, 29.0, 52.0), &d));
    }

    #[test]
    fn test_best_divider_takes_first_in_catalog_order() {
        let catalog = vec![
            divider("4×8", 82.0, 28.0, 52.0),
            divider("4×4", 82.0, 57.0, 52.0),
            divider("2×2", 166.0, 117.0, 52.0),
        ];
        let hit = best_divider(&dims(80.0, 40.0, 30.0), &catalog).unwrap();
        assert_eq!(hit.name, "4×4"); // 4×8 too narrow, 4×4 wins over 2×2
    }

    #[test]
    fn test_best_divider_none_when_nothing_accepts() {
        let catalog = vec![divider("4×8", 82.0, 28.0, 52.0)];
        assert!(best_divider(&dims(500.0, 500.0, 500.0), &catalog).is_none());
        assert!(best_divider(&dims(1.0, 1.0, 1.0), &[]).is_none());
    }
}
